use jiff::civil::DateTime;

/// Wire format of both bounds, `yyyy-MM-dd HH:mm:ss` in local clock time.
pub const TIME_WINDOW_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Start and end of the window in which the server looks for a departure.
///
/// Bounds are civil date-times: no timezone is attached and none is sent.
/// The window is not checked for `start <= end`, the server decides what
/// an inverted window means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: DateTime,
    end: DateTime,
}

impl TimeWindow {
    pub fn new(start: DateTime, end: DateTime) -> Self {
        TimeWindow { start, end }
    }

    pub fn start(&self) -> DateTime {
        self.start
    }

    pub fn end(&self) -> DateTime {
        self.end
    }

    pub fn formatted_start(&self) -> String {
        format_time(self.start)
    }

    pub fn formatted_end(&self) -> String {
        format_time(self.end)
    }
}

pub fn format_time(time: DateTime) -> String {
    time.strftime(TIME_WINDOW_FORMAT).to_string()
}

pub fn parse_time(input: &str) -> Result<DateTime, jiff::Error> {
    DateTime::strptime(TIME_WINDOW_FORMAT, input)
}

#[derive(Default)]
pub struct TimeWindowBuilder {
    start: Option<DateTime>,
    end: Option<DateTime>,
}

impl TimeWindowBuilder {
    pub fn with_start(mut self, start: DateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn with_end(mut self, end: DateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Missing bounds collapse onto the other one, or onto `fallback` when
    /// neither is set.
    pub fn build_or(self, fallback: DateTime) -> TimeWindow {
        let start = self.start.or(self.end).unwrap_or(fallback);
        let end = self.end.unwrap_or(start);
        TimeWindow { start, end }
    }
}
