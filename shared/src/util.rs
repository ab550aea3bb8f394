/// 获取当前 UTC 时间戳（毫秒）
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Format a sequential id as `PREFIX-NNN` (zero-padded to at least three digits)
pub fn sequential_id(prefix: &str, seq: u64) -> String {
    format!("{prefix}-{seq:03}")
}

/// Parse the numeric suffix of a `PREFIX-NNN` id
pub fn parse_sequence(prefix: &str, id: &str) -> Option<u64> {
    id.strip_prefix(prefix)?.strip_prefix('-')?.parse().ok()
}
