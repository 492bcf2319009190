#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate};
    use timeclock::model::report::Report;
    use timeclock::summary::range::EligibleWindow;
    use timeclock::summary::reconcile::reconcile;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn report(date: NaiveDate) -> Report {
        Report {
            id: 0,
            member_id: 1,
            date,
            work_time: 480,
            in_time: date.and_hms_opt(9, 0, 0).unwrap(),
            out_time: Some(date.and_hms_opt(18, 0, 0).unwrap()),
            short_leave_time: 0,
            total_work_time: Some(505),
            status: 1,
        }
    }

    #[test]
    fn test_one_record_per_day_ascending_no_gaps() {
        let window = EligibleWindow {
            start: date(2024, 1, 1),
            end: date(2024, 1, 31),
        };
        let reports = vec![report(date(2024, 1, 5)), report(date(2024, 1, 20))];

        let records = reconcile(&reports, &window);

        assert_eq!(records.len(), 31);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.date, window.start + Duration::days(i as i64));
        }
    }

    #[test]
    fn test_matched_days_project_the_report() {
        let window = EligibleWindow {
            start: date(2024, 1, 5),
            end: date(2024, 1, 5),
        };
        let records = reconcile(&[report(date(2024, 1, 5))], &window);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert!(record.present);
        assert_eq!(record.work_time, 480);
        assert_eq!(record.total_work_time, 505);
        assert_eq!(record.in_time, Some(date(2024, 1, 5).and_hms_opt(9, 0, 0).unwrap()));
        assert_eq!(record.status, 1);
        assert_eq!(record.day_name, "Friday");
    }

    #[test]
    fn test_unmatched_days_become_absences() {
        let window = EligibleWindow {
            start: date(2024, 1, 1),
            end: date(2024, 1, 3),
        };
        let records = reconcile(&[report(date(2024, 1, 2))], &window);

        let absent = &records[0];
        assert!(!absent.present);
        assert_eq!(absent.work_time, 0);
        assert_eq!(absent.in_time, None);
        assert_eq!(absent.out_time, None);
        assert_eq!(absent.short_leave_time, 0);
        assert_eq!(absent.total_work_time, 0);
        assert_eq!(absent.status, 0);
        assert_eq!(absent.day_name, "Monday");

        assert!(records[1].present);
        assert!(!records[2].present);
    }

    #[test]
    fn test_missing_total_work_time_counts_as_zero() {
        let window = EligibleWindow {
            start: date(2024, 1, 5),
            end: date(2024, 1, 5),
        };
        let mut open_session = report(date(2024, 1, 5));
        open_session.total_work_time = None;
        open_session.out_time = None;

        let records = reconcile(&[open_session], &window);
        assert!(records[0].present);
        assert_eq!(records[0].total_work_time, 0);
        assert_eq!(records[0].out_time, None);
    }

    #[test]
    fn test_reports_outside_the_window_are_ignored() {
        let window = EligibleWindow {
            start: date(2024, 2, 1),
            end: date(2024, 2, 29),
        };
        let reports = vec![
            report(date(2024, 1, 31)),
            report(date(2024, 2, 15)),
            report(date(2024, 3, 1)),
        ];

        let records = reconcile(&reports, &window);
        assert_eq!(records.len(), 29);
        assert_eq!(records.iter().filter(|r| r.present).count(), 1);
        assert!(records[14].present);
    }

    #[test]
    fn test_report_order_does_not_matter() {
        let window = EligibleWindow {
            start: date(2024, 1, 1),
            end: date(2024, 1, 10),
        };
        let forward = vec![report(date(2024, 1, 2)), report(date(2024, 1, 8))];
        let backward = vec![report(date(2024, 1, 8)), report(date(2024, 1, 2))];

        let a = reconcile(&forward, &window);
        let b = reconcile(&backward, &window);

        let presence_a: Vec<bool> = a.iter().map(|r| r.present).collect();
        let presence_b: Vec<bool> = b.iter().map(|r| r.present).collect();
        assert_eq!(presence_a, presence_b);
    }

    #[test]
    fn test_single_day_window() {
        let window = EligibleWindow {
            start: date(2024, 7, 4),
            end: date(2024, 7, 4),
        };
        let records = reconcile(&[], &window);
        assert_eq!(records.len(), 1);
        assert!(!records[0].present);
    }

    #[test]
    fn test_full_leap_year_window() {
        let window = EligibleWindow {
            start: date(2024, 1, 1),
            end: date(2024, 12, 31),
        };
        let records = reconcile(&[], &window);
        assert_eq!(records.len(), 366);
        assert_eq!(records.first().unwrap().date, date(2024, 1, 1));
        assert_eq!(records.last().unwrap().date, date(2024, 12, 31));
    }
}
