//! File names for saved images.

/// Last segment of the URL path as typed, or the content-hash fallback when
/// the path ends in `/`.
///
/// `url` is the user's input, not the normalised form: `café.png` stays
/// `café.png` and `my%20cat.png` stays `my%20cat.png`. Query and fragment are
/// ignored. Only the name decides duplicates, so two different images that
/// resolve to the same name collide.
pub fn resolve_file_name(url: &str, body: &[u8]) -> String {
    path_basename(url)
        .map(str::to_string)
        .unwrap_or_else(|| fallback_name(body))
}

/// `image_<first 8 hex chars of md5(body)>.jpg`
pub fn fallback_name(body: &[u8]) -> String {
    let digest = format!("{:x}", md5::compute(body));

    format!("image_{}.jpg", &digest[..8])
}

fn path_basename(url: &str) -> Option<&str> {
    raw_path(url)
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Path component of `url` with scheme, authority, query and fragment removed.
fn raw_path(url: &str) -> &str {
    let url = url.trim();
    let url = match url.find(|c| c == '?' || c == '#') {
        Some(end) => &url[..end],
        None => url,
    };

    let rest = match url.split_once(':') {
        Some((_scheme, rest)) => rest,
        None => url,
    };

    match rest.strip_prefix("//") {
        Some(authority_and_path) => authority_and_path
            .find('/')
            .map_or("", |start| &authority_and_path[start..]),
        None => rest,
    }
}
