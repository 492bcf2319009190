#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timeclock::model::report::Report;
    use timeclock::summary::monthly::aggregate_month;
    use timeclock::summary::range::{EligibleWindow, resolve_month_range};
    use timeclock::summary::reconcile::reconcile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report(date: NaiveDate, total_work_time: i32) -> Report {
        Report {
            id: 0,
            member_id: 1,
            date,
            work_time: 480,
            in_time: date.and_hms_opt(9, 0, 0).unwrap(),
            out_time: Some(date.and_hms_opt(18, 0, 0).unwrap()),
            short_leave_time: 0,
            total_work_time: Some(total_work_time),
            status: 1,
        }
    }

    fn full_month(year: i32, month: u32) -> EligibleWindow {
        resolve_month_range(date(2020, 1, 1), None, year, month).unwrap()
    }

    #[test]
    fn test_two_january_reports_mean_two_present_twenty_nine_leave() {
        let window = full_month(2024, 1);
        let reports = vec![report(date(2024, 1, 5), 500), report(date(2024, 1, 9), 460)];
        let records = reconcile(&reports, &window);

        let summary = aggregate_month(2024, 1, &records);

        assert_eq!(summary.month, "January");
        assert_eq!(summary.year, 2024);
        assert_eq!(summary.total_present_days, 2);
        assert_eq!(summary.leave_days, 29);
        assert_eq!(summary.total_work_complete, 960);
        assert_eq!(summary.total_work_time_sum, 960);
        assert_eq!(summary.average_work_time, 480.0);
    }

    #[test]
    fn test_present_plus_leave_equals_days_in_month() {
        for month in 1..=12 {
            let window = full_month(2024, month);
            let records = reconcile(&[report(date(2024, month, 3), 480)], &window);
            let summary = aggregate_month(2024, month, &records);
            assert_eq!(
                summary.total_present_days + summary.leave_days,
                window.num_days(),
                "month {month}"
            );
        }
    }

    #[test]
    fn test_clipped_month_keeps_the_invariant() {
        // Joined June 15: June has 16 eligible days, not 30.
        let window = resolve_month_range(date(2024, 6, 15), None, 2024, 6).unwrap();
        let records = reconcile(&[report(date(2024, 6, 17), 480)], &window);
        let summary = aggregate_month(2024, 6, &records);

        assert_eq!(summary.total_present_days, 1);
        assert_eq!(summary.leave_days, 15);
        assert_eq!(summary.total_present_days + summary.leave_days, 16);
    }

    #[test]
    fn test_average_is_rounded_to_two_decimals() {
        let window = full_month(2024, 1);
        let reports = vec![
            report(date(2024, 1, 2), 500),
            report(date(2024, 1, 3), 450),
            report(date(2024, 1, 4), 460),
        ];
        let records = reconcile(&reports, &window);
        let summary = aggregate_month(2024, 1, &records);

        // 1410 / 3 = 470.0; use an uneven sum too
        assert_eq!(summary.average_work_time, 470.0);

        let reports = vec![report(date(2024, 1, 2), 500), report(date(2024, 1, 3), 451)];
        let records = reconcile(&reports, &window);
        let summary = aggregate_month(2024, 1, &records);
        // 951 / 2 = 475.5
        assert_eq!(summary.average_work_time, 475.5);
    }

    #[test]
    fn test_empty_month_yields_zeros_and_no_averages() {
        let window = full_month(2024, 2);
        let records = reconcile(&[], &window);
        let summary = aggregate_month(2024, 2, &records);

        assert_eq!(summary.total_present_days, 0);
        assert_eq!(summary.leave_days, 29);
        assert_eq!(summary.total_work_complete, 0);
        assert_eq!(summary.average_work_time, 0.0);
        assert_eq!(summary.average_in_time, None);
        assert_eq!(summary.average_out_time, None);
    }

    #[test]
    fn test_no_records_at_all_is_all_zero() {
        let summary = aggregate_month(2024, 3, &[]);
        assert_eq!(summary.month, "March");
        assert_eq!(summary.total_present_days, 0);
        assert_eq!(summary.leave_days, 0);
        assert_eq!(summary.average_work_time, 0.0);
    }

    #[test]
    fn test_average_clock_times_come_from_present_days() {
        let window = full_month(2024, 1);
        let mut early = report(date(2024, 1, 2), 480);
        early.in_time = date(2024, 1, 2).and_hms_opt(8, 0, 0).unwrap();
        early.out_time = Some(date(2024, 1, 2).and_hms_opt(17, 0, 0).unwrap());
        let mut late = report(date(2024, 1, 3), 480);
        late.in_time = date(2024, 1, 3).and_hms_opt(10, 0, 0).unwrap();
        late.out_time = Some(date(2024, 1, 3).and_hms_opt(19, 0, 0).unwrap());

        let records = reconcile(&[early, late], &window);
        let summary = aggregate_month(2024, 1, &records);

        assert_eq!(summary.average_in_time.as_deref(), Some("09:00:00"));
        assert_eq!(summary.average_out_time.as_deref(), Some("18:00:00"));
    }

    #[test]
    fn test_open_sessions_are_skipped_in_out_average() {
        let window = full_month(2024, 1);
        let mut open_session = report(date(2024, 1, 2), 480);
        open_session.out_time = None;
        let closed = report(date(2024, 1, 3), 480);

        let records = reconcile(&[open_session, closed], &window);
        let summary = aggregate_month(2024, 1, &records);

        // Only the closed session contributes an out stamp
        assert_eq!(summary.average_out_time.as_deref(), Some("18:00:00"));
        assert_eq!(summary.total_present_days, 2);
    }
}
