use commute_client::time_window;
use jiff::civil::{Date, DateTime, Time};

const CLOCK_FORMATS: [&str; 2] = ["%H:%M:%S", "%H:%M"];

/// Accepts a full date-time or a clock time, the latter taken on today's
/// local date.
pub fn parse_time(input: &str) -> Result<DateTime, String> {
    parse_time_on(input, jiff::Zoned::now().date())
}

pub fn parse_time_on(input: &str, today: Date) -> Result<DateTime, String> {
    let input = input.trim();

    if let Ok(datetime) = time_window::parse_time(input) {
        return Ok(datetime);
    }

    if let Ok(datetime) = input.parse::<DateTime>() {
        return Ok(datetime);
    }

    for format in CLOCK_FORMATS {
        if let Ok(time) = Time::strptime(format, input) {
            return Ok(today.to_datetime(time));
        }
    }

    Err(format!(
        "Invalid time \"{}\", expected HH:MM, HH:MM:SS, YYYY-MM-DD HH:MM:SS or YYYY-MM-DDTHH:MM:SS",
        input
    ))
}

/// Splits `<start> <end>`, where each side may itself be `YYYY-MM-DD HH:MM:SS`.
pub fn parse_window_line(line: &str, today: Date) -> Result<(DateTime, DateTime), String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    let (start, end) = match tokens.as_slice() {
        [start, end] => (start.to_string(), end.to_string()),
        [start_date, start_time, end_date, end_time] => (
            format!("{start_date} {start_time}"),
            format!("{end_date} {end_time}"),
        ),
        _ => return Err(String::from("Expected \"<start> <end>\"")),
    };

    Ok((parse_time_on(&start, today)?, parse_time_on(&end, today)?))
}
