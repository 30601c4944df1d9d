use std::fmt::Write;

pub const PLAYER_COUNT_FILE: &str = "player_count.html";
pub const PAGE_FILE: &str = "index.html";

pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S %m/%d/%Y";

static PROFILE_BASE: std::sync::LazyLock<url::Url> = std::sync::LazyLock::new(|| {
    url::Url::parse("http://battlelog.battlefield.com/bf4/soldier/")
        .expect("the profile base is a valid absolute URL")
});

const STYLE: &str = "<style>
table,th,td
{
border:1px solid black;
font-size:95%;
}
</style>
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub player_count: String,
    pub page: String,
}

#[derive(Debug)]
pub struct Config {
    /// Interval of the refresh directive, in seconds
    pub refresh: u64,
}

/// Produces the content of both output files.
///
/// Nothing is written here, the caller gets both documents or neither.
pub fn render(
    config: &Config,
    status: &common::ServerStatus,
    report: &common::PlayerReport,
    updated_at: chrono::DateTime<chrono::Utc>,
) -> Rendered {
    let player_count = status.player_count.to_string();

    let mut page = String::with_capacity(1024 + report.len() * 256);
    page.push_str(STYLE);
    let _ = writeln!(
        page,
        "<meta http-equiv=\"refresh\" content=\"{}\" >",
        config.refresh
    );
    let _ = writeln!(
        page,
        "{} player(s) on {} {}.",
        player_count,
        escape(&status.map_name),
        escape(&status.mode_name)
    );
    page.push_str("<table style=\"width:270px\">\n");
    page.push_str("    <tr>\n        <td>Player</td>\n        <td>Cheat Score</td>\n    </tr>\n");

    for entry in report.iter() {
        player_row(&mut page, entry);
    }

    page.push_str("</table>\n");
    let _ = writeln!(
        page,
        "Last updated at {} UTC.",
        updated_at.format(TIMESTAMP_FORMAT)
    );

    Rendered { player_count, page }
}

fn player_row(page: &mut String, entry: &common::PlayerEntry) {
    let record = entry.reputation.as_ref();
    let persona_id = record.and_then(|r| r.persona_id.as_deref()).unwrap_or("");
    let score = record
        .and_then(|r| r.cheat_score)
        .map(format_score)
        .unwrap_or_default();
    let flagged = record.map(|r| r.is_flagged()).unwrap_or(false);

    let score_content = match record.and_then(|r| r.profile_url.as_deref()) {
        Some(url) => format!("<a href=\"{}\">{}</a>", escape(url), score),
        None => score,
    };

    page.push_str("    <tr>\n");
    let _ = writeln!(
        page,
        "        <td><a href=\"{}\">{}</a></td>",
        escape(&profile_url(&entry.name, persona_id)),
        escape(&entry.name)
    );
    if flagged {
        let _ = writeln!(page, "        <td bgcolor=\"red\">{}</td>", score_content);
    } else {
        let _ = writeln!(page, "        <td>{}</td>", score_content);
    }
    page.push_str("    </tr>\n");
}

/// Battlelog profile of a soldier, `<base>/<name>/stats/<persona id>/pc/`
pub fn profile_url(name: &str, persona_id: &str) -> String {
    let mut url = PROFILE_BASE.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments
            .pop_if_empty()
            .extend([name, "stats", persona_id, "pc", ""]);
    }
    url.into()
}

/// Whole scores are shown without a fractional part
fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.abs() < 1e15 {
        format!("{:.0}", score)
    } else {
        score.to_string()
    }
}

fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
