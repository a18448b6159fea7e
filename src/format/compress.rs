//! RFC 5952 §4.2.2 zero-run compression.

/// Replace the longest run of `"0"` groups with `::`.
///
/// Runs shorter than two groups are left alone, and when several runs share
/// the maximum length the leftmost one is elided.
///
/// # Example
///
/// ```
/// use ipnorm::format::compress;
///
/// assert_eq!(compress(&["1", "0", "0", "2", "3", "0", "0", "1"]), "1::2:3:0:0:1");
/// assert_eq!(compress(&["1", "0", "2"]), "1:0:2");
/// ```
pub fn compress<S: AsRef<str>>(groups: &[S]) -> String {
    let Some((start, len)) = longest_zero_run(groups) else {
        return join(groups);
    };

    format!(
        "{}::{}",
        join(&groups[..start]),
        join(&groups[start + len..])
    )
}

/// Start and length of the leftmost longest run of `"0"`, if it spans 2+ groups.
fn longest_zero_run<S: AsRef<str>>(groups: &[S]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    let mut run_start = None;

    // A trailing sentinel closes a run that reaches the end
    for (i, group) in groups.iter().map(|g| Some(g.as_ref())).chain([None]).enumerate() {
        match (group, run_start) {
            (Some("0"), None) => run_start = Some(i),
            (Some("0"), Some(_)) => {}
            (_, Some(start)) => {
                let len = i - start;
                // Strictly longer only, so ties keep the earlier run
                if len >= 2 && best.map_or(true, |(_, best_len)| len > best_len) {
                    best = Some((start, len));
                }
                run_start = None;
            }
            (_, None) => {}
        }
    }

    best
}

fn join<S: AsRef<str>>(groups: &[S]) -> String {
    groups
        .iter()
        .map(|group| group.as_ref())
        .collect::<Vec<&str>>()
        .join(":")
}
