//! 令牌脱敏

/// 将令牌转换为可展示的形式
///
/// 以 `.` 分段，保留前两段，其余各段的每个字符替换为 `*`，
/// 分隔符与长度保持不变。
pub fn sanitize_token(token: &str) -> String {
    token
        .split('.')
        .enumerate()
        .map(|(i, segment)| {
            if i < 2 {
                segment.to_string()
            } else {
                "*".repeat(segment.chars().count())
            }
        })
        .collect::<Vec<_>>()
        .join(".")
}
