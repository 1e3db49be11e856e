use guidepost_entities::{id::Id, time::Timestamp};
use time::OffsetDateTime;

/// Object key layout for client uploads:
/// `uploads/{user}/{file_type}/{year}/{month}/{id}.{ext}`
pub fn object_key(user: &str, file_type: &str, at: Timestamp, id: &Id, ext: &str) -> String {
    let dt = OffsetDateTime::from_unix_timestamp(at.as_secs())
        .unwrap_or(OffsetDateTime::UNIX_EPOCH);
    format!(
        "uploads/{user}/{file_type}/{year}/{month:02}/{id}.{ext}",
        year = dt.year(),
        month = u8::from(dt.month()),
    )
}

/// Public URL of an uploaded object on a virtual-hosted-style bucket.
pub fn public_url(bucket: &str, endpoint: &str, key: &str) -> String {
    format!("https://{bucket}.{endpoint}/{key}")
}
