#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use timeclock::summary::calendar;

    #[test]
    fn test_month_name_mapping() {
        assert_eq!(calendar::month_name(1), "January");
        assert_eq!(calendar::month_name(6), "June");
        assert_eq!(calendar::month_name(12), "December");
    }

    #[test]
    fn test_parse_month_accepts_names_any_case() {
        assert_eq!(calendar::parse_month("January"), Some(1));
        assert_eq!(calendar::parse_month("january"), Some(1));
        assert_eq!(calendar::parse_month("DECEMBER"), Some(12));
        assert_eq!(calendar::parse_month("sePtEmBeR"), Some(9));
    }

    #[test]
    fn test_parse_month_accepts_numbers() {
        assert_eq!(calendar::parse_month("1"), Some(1));
        assert_eq!(calendar::parse_month("12"), Some(12));
        assert_eq!(calendar::parse_month("0"), None);
        assert_eq!(calendar::parse_month("13"), None);
    }

    #[test]
    fn test_parse_month_rejects_garbage() {
        assert_eq!(calendar::parse_month("Januar"), None);
        assert_eq!(calendar::parse_month("Jan"), None);
        assert_eq!(calendar::parse_month(""), None);
        assert_eq!(calendar::parse_month("month"), None);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(calendar::days_in_month(2024, 1), 31);
        assert_eq!(calendar::days_in_month(2024, 4), 30);
        assert_eq!(calendar::days_in_month(2024, 12), 31);
    }

    #[test]
    fn test_days_in_february_tracks_leap_years() {
        assert_eq!(calendar::days_in_month(2024, 2), 29);
        assert_eq!(calendar::days_in_month(2023, 2), 28);
        // Century rule: 1900 is not a leap year, 2000 is
        assert_eq!(calendar::days_in_month(1900, 2), 28);
        assert_eq!(calendar::days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_month_bounds() {
        let (first, last) = calendar::month_bounds(2024, 2).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        let (first, last) = calendar::month_bounds(2024, 12).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 12, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());

        assert!(calendar::month_bounds(2024, 0).is_none());
        assert!(calendar::month_bounds(2024, 13).is_none());
    }

    #[test]
    fn test_year_bounds() {
        let (first, last) = calendar::year_bounds(2024).unwrap();
        assert_eq!(first, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(last, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
    }

    #[test]
    fn test_day_name() {
        // 2024-01-01 was a Monday
        assert_eq!(
            calendar::day_name(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
            "Monday"
        );
        assert_eq!(
            calendar::day_name(NaiveDate::from_ymd_opt(2024, 1, 7).unwrap()),
            "Sunday"
        );
    }
}
