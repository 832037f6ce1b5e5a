/// Render a second count as `MM:SS`. Fields grow past two digits instead of wrapping.
pub fn format_elapsed(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}
