/// Concrete portion of `path` covered by `pattern`.
///
/// Literal segments must be equal ignoring ASCII case, `{param}` segments take the path's value,
/// and a `{*rest}` segment swallows the remainder. Matching stops at the first
/// segment that differs; `/` is returned when nothing matched.
///
/// Used to key outlets of parent layouts by the path the user actually
/// visited rather than by the layout's pattern.
pub fn matched_prefix(pattern: &str, path: &str) -> String {
    let pattern_segments = pattern
        .trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty());
    let mut path_segments = path
        .trim_start_matches('/')
        .split('/')
        .filter(|s| !s.is_empty());

    let mut matched = Vec::new();

    for pattern_seg in pattern_segments {
        if pattern_seg.starts_with("{*") {
            matched.extend(path_segments.by_ref());
            break;
        }

        let Some(path_seg) = path_segments.next() else {
            break;
        };

        let is_param = pattern_seg.starts_with('{') && pattern_seg.ends_with('}');

        if !is_param && !pattern_seg.eq_ignore_ascii_case(path_seg) {
            break;
        }

        matched.push(path_seg);
    }

    format!("/{}", matched.join("/"))
}
