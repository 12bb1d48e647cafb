/// Everything before the first `-` of a `YYYY[-MM[-DD]]` date.
pub fn year_prefix(release_date: &str) -> &str {
    release_date.split('-').next().unwrap_or(release_date)
}

pub fn parse_year(release_date: &str) -> Option<i32> {
    year_prefix(release_date).trim().parse::<i32>().ok()
}
