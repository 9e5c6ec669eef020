/// Maximum number of message characters kept in a TestRail comment.
pub const COMMENT_SIZE_LIMIT: usize = 1000;

const BANNER: &str = "# Robot Framework result: #";
const TRUNCATION_MARKER: &str = "\n...\nLog truncated";

/// Turns a test message into a TestRail comment. Continuation lines are
/// indented so that TestRail renders the message as preformatted text.
pub fn format_comment(message: &str) -> Option<String> {
    if message.is_empty() {
        return None;
    }
    let kept: String = message.chars().take(COMMENT_SIZE_LIMIT).collect();
    let mut comment = format!("{}\n    {}", BANNER, kept.replace('\n', "\n    "));
    if message.chars().count() > COMMENT_SIZE_LIMIT {
        comment.push_str(TRUNCATION_MARKER);
    }
    Some(comment)
}
