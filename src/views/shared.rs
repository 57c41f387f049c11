use once_cell::sync::Lazy;
use regex::Regex;
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

static URL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://[^\s]+").expect("url pattern is valid"));

const MESSAGE_TIME_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period case:upper]"
);
const TODAY_FORMAT: &[FormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute padding:zero] [period case:upper]");
const THIS_YEAR_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none]");
const FULL_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[month repr:short] [day padding:none], [year]");

/// Renders message text to HTML. The text is shown as typed, except that
/// bare URLs become links opening in a new tab. Everything else is escaped.
pub fn format_message_content(content: &str) -> String {
    let mut html = String::with_capacity(content.len());
    let mut last = 0;
    for url in URL_PATTERN.find_iter(content) {
        push_escaped(&mut html, &content[last..url.start()]);
        let mut href = String::new();
        push_escaped(&mut href, url.as_str());
        html.push_str(&format!(
            "<a href=\"{href}\" target=\"_blank\" rel=\"noopener noreferrer\">{href}</a>"
        ));
        last = url.end();
    }
    push_escaped(&mut html, &content[last..]);
    html
}

fn push_escaped(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
}

fn local_offset() -> UtcOffset {
    UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC)
}

pub fn format_message_timestamp(timestamp: OffsetDateTime) -> String {
    format_message_timestamp_in(timestamp, local_offset())
}

/// `M/D/YYYY, h:mm:ss AM` in the given offset.
pub fn format_message_timestamp_in(timestamp: OffsetDateTime, offset: UtcOffset) -> String {
    timestamp
        .to_offset(offset)
        .format(MESSAGE_TIME_FORMAT)
        .unwrap_or_default()
}

/// Sidebar label for a thread, relative to `now` in the local timezone.
pub fn format_thread_timestamp(timestamp: OffsetDateTime, now: OffsetDateTime) -> String {
    format_thread_timestamp_in(timestamp, now, local_offset())
}

/// Time of day for today, month and day within the current year, the full
/// date otherwise.
pub fn format_thread_timestamp_in(
    timestamp: OffsetDateTime,
    now: OffsetDateTime,
    offset: UtcOffset,
) -> String {
    let timestamp = timestamp.to_offset(offset);
    let now = now.to_offset(offset);
    let format = if timestamp.date() == now.date() {
        TODAY_FORMAT
    } else if timestamp.year() == now.year() {
        THIS_YEAR_FORMAT
    } else {
        FULL_DATE_FORMAT
    };
    timestamp.format(format).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{datetime, offset};

    #[test]
    fn urls_become_external_links() {
        let html = format_message_content("docs at https://example.com/guide today");
        assert_eq!(
            html,
            "docs at <a href=\"https://example.com/guide\" target=\"_blank\" rel=\"noopener noreferrer\">https://example.com/guide</a> today"
        );
    }

    #[test]
    fn plain_text_is_left_as_typed() {
        for text in [
            "no links here",
            "2 * 3 * 4 is *twenty-four*",
            "# not a heading",
            "    indented line",
            "1986. a year",
            "first line\nsecond line",
        ] {
            assert_eq!(format_message_content(text), text);
        }
    }

    #[test]
    fn raw_html_is_escaped() {
        let html = format_message_content("<script>alert(1)</script> & \"more\"");
        assert_eq!(
            html,
            "&lt;script&gt;alert(1)&lt;/script&gt; &amp; &quot;more&quot;"
        );
    }

    #[test]
    fn quotes_inside_urls_cannot_break_the_attribute() {
        let html = format_message_content("http://x.test/\"onmouseover=1");
        assert!(html.contains("href=\"http://x.test/&quot;onmouseover=1\""));
    }

    #[test]
    fn message_timestamp_is_unpadded_us_style() {
        let ts = datetime!(2026-03-07 09:05:03 UTC);
        assert_eq!(
            format_message_timestamp_in(ts, UtcOffset::UTC),
            "3/7/2026, 9:05:03 AM"
        );
        assert_eq!(
            format_message_timestamp_in(ts, offset!(-10)),
            "3/6/2026, 11:05:03 PM"
        );
    }

    #[test]
    fn same_day_shows_time() {
        let now = datetime!(2026-10-19 18:00 UTC);
        let ts = datetime!(2026-10-19 09:05 UTC);
        assert_eq!(format_thread_timestamp_in(ts, now, UtcOffset::UTC), "09:05 AM");
    }

    #[test]
    fn same_year_shows_month_and_day() {
        let now = datetime!(2026-10-19 18:00 UTC);
        let ts = datetime!(2026-03-07 09:05 UTC);
        assert_eq!(format_thread_timestamp_in(ts, now, UtcOffset::UTC), "Mar 7");
    }

    #[test]
    fn older_shows_full_date() {
        let now = datetime!(2026-10-19 18:00 UTC);
        let ts = datetime!(2025-12-31 23:00 UTC);
        assert_eq!(
            format_thread_timestamp_in(ts, now, UtcOffset::UTC),
            "Dec 31, 2025"
        );
    }

    #[test]
    fn day_boundary_uses_local_offset() {
        let now = datetime!(2026-10-19 02:00 UTC);
        let ts = datetime!(2026-10-18 23:30 UTC);
        assert_eq!(format_thread_timestamp_in(ts, now, UtcOffset::UTC), "Oct 18");
        assert_eq!(
            format_thread_timestamp_in(ts, now, offset!(+3)),
            "02:30 AM"
        );
    }
}
