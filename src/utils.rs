/// Builds the effective scan text from raw config contents.
///
/// Each line is cut at its first `#` and trimmed, then the lines are joined
/// back with `\n`. Trimming also drops the `\r` of CRLF line endings.
///
/// This is a naive strip: a `#` inside a quoted value starts a comment too.
pub fn strip_comments(source: &str) -> String {
    source
        .split('\n')
        .map(|line| {
            let code = line.split_once('#').map_or(line, |(head, _)| head);
            code.trim()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
