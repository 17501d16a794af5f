//! # URL Normalizer Domain Service
//!
//! GitHubのblob表示URLをraw content URLに変換する

use url::Url;

/// raw content を配信するホスト
pub const RAW_CONTENT_HOST: &str = "raw.githubusercontent.com";

const GITHUB_HOST_MARKER: &str = "github.com";
const BLOB_SEGMENT: &str = "/blob/";

/// GitHubのblob URLをraw content URLに変換する
///
/// ホストに `github.com` を含む場合、ホストを `raw.githubusercontent.com` に置き換え、
/// パス中の `/blob/` を全て `/` に縮める。それ以外のURL（パースできないものを含む）は
/// そのまま返す。
///
/// # 例
///
/// ```
/// use blobingest::domain::services::url_normalizer::to_raw_content_url;
///
/// assert_eq!(
///     to_raw_content_url("https://github.com/org/repo/blob/main/readme.md"),
///     "https://raw.githubusercontent.com/org/repo/main/readme.md"
/// );
/// assert_eq!(
///     to_raw_content_url("https://example.com/blob/a.txt"),
///     "https://example.com/blob/a.txt"
/// );
/// ```
pub fn to_raw_content_url(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let is_github = parsed
        .host_str()
        .is_some_and(|host| host.contains(GITHUB_HOST_MARKER));
    if !is_github {
        return url.to_string();
    }

    if parsed.set_host(Some(RAW_CONTENT_HOST)).is_err() {
        return url.to_string();
    }

    // `/blob/blob/` のように重なる場合も残らないよう繰り返す
    let mut path = parsed.path().to_string();
    while path.contains(BLOB_SEGMENT) {
        path = path.replace(BLOB_SEGMENT, "/");
    }
    parsed.set_path(&path);
    parsed.to_string()
}
