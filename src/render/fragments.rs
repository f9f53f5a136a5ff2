use chrono::{DateTime, Utc};

use crate::domain::{ChannelListing, Submission, SubredditListing, Video};
use crate::render::markup::Markup;

/// `<h2>` heading followed by the feed's source blocks
pub fn feed_block(name: &str, sources: &[Markup]) -> Markup {
    Markup::raw(format!(
        "<h2>{}</h2>\n{}",
        Markup::text(name),
        Markup::join(sources, "\n")
    ))
}

fn table_block(heading: &str, rows: &[Markup]) -> Markup {
    let mut html = format!("<h3>{}</h3>\n<table>\n", Markup::text(heading));
    for row in rows {
        html.push_str(row.as_str());
        html.push('\n');
    }
    html.push_str("</table>");
    Markup::raw(html)
}

fn link(href: &str, text: &str) -> String {
    format!(
        "<a href=\"{}\">{}</a>",
        Markup::attribute(href),
        Markup::text(text)
    )
}

pub fn submission_row(submission: &Submission) -> Markup {
    Markup::raw(format!(
        "<tr><td>Score: {}, Comments: {}</td><td>{}</td><td>{}</td></tr>",
        submission.score,
        submission.num_comments,
        Markup::text(&submission.created_display()),
        link(&submission.permalink(), &submission.title)
    ))
}

pub fn subreddit_block(listing: &SubredditListing) -> Markup {
    let rows: Vec<Markup> = listing.submissions.iter().map(submission_row).collect();
    table_block(&listing.title, &rows)
}

/// Date cell is highlighted when the video is new at `now`
pub fn video_row(video: &Video, now: DateTime<Utc>) -> Markup {
    let highlight = if video.is_new(now) {
        " style=\"color:red\""
    } else {
        ""
    };

    Markup::raw(format!(
        "<tr><td{}>{}</td><td>{}</td></tr>",
        highlight,
        Markup::text(&video.published_display()),
        link(&video.url, &video.title)
    ))
}

pub fn channel_block(listing: &ChannelListing, now: DateTime<Utc>) -> Markup {
    let rows: Vec<Markup> = listing
        .videos
        .iter()
        .map(|video| video_row(video, now))
        .collect();
    table_block(&listing.channel.title, &rows)
}
