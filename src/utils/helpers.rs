/// 按逗号拆分地址列表，去除空白并丢弃空项
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// 用逗号连接地址列表，跳过空项
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_trims_and_drops_empty_tokens() {
        assert_eq!(
            split_list("10.0.0.1, 10.0.0.2,"),
            vec!["10.0.0.1", "10.0.0.2"]
        );
        assert!(split_list(" , ,").is_empty());
        assert!(split_list("").is_empty());
    }

    #[test]
    fn join_skips_empty_entries() {
        assert_eq!(
            join_list(&["8.8.8.8", "", "1.1.1.1"]),
            "8.8.8.8,1.1.1.1"
        );
        assert_eq!(join_list::<&str>(&[]), "");
    }
}
