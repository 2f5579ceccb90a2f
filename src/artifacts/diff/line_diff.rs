/// A line position where the two versions differ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number
    pub line: usize,
    /// Old content of the line, `None` past the end of the old version
    pub removed: Option<String>,
    /// New content of the line, `None` past the end of the new version
    pub added: Option<String>,
}

/// Compare two versions line by line, position against position
///
/// A position past the end of the shorter version reads as an empty line,
/// so trailing blank lines on one side only are not reported.
pub fn positional_diff(old: &[String], new: &[String]) -> Vec<LineChange> {
    let max_len = old.len().max(new.len());

    (0..max_len)
        .filter_map(|i| {
            let removed = old.get(i);
            let added = new.get(i);
            let differs = removed.map_or("", String::as_str) != added.map_or("", String::as_str);

            differs.then(|| LineChange {
                line: i + 1,
                removed: removed.cloned(),
                added: added.cloned(),
            })
        })
        .collect()
}
