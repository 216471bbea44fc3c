use crate::constants::{CURRENCY, IPFS_GATEWAY, PLACEHOLDER_IMAGE};

/// Resolves a content address through the IPFS gateway, or falls back to the
/// bundled placeholder when there is none.
pub fn image_src(image: Option<&str>) -> String {
    match image.filter(|cid| !cid.is_empty()) {
        Some(cid) => format!("{IPFS_GATEWAY}{cid}"),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

// f64's Display already drops a trailing ".0"
pub fn display_price(price: f64) -> String {
    format!("{price} {CURRENCY}")
}

/// Parses a user-entered price. Only finite amounts above zero are accepted.
pub fn parse_price(amount: impl AsRef<str>) -> Option<f64> {
    amount
        .as_ref()
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite() && *price > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_src() {
        assert_eq!(
            image_src(Some("QmHash")),
            format!("{IPFS_GATEWAY}QmHash")
        );
        assert_eq!(image_src(None), PLACEHOLDER_IMAGE);
        assert_eq!(image_src(Some("")), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_display_price() {
        assert_eq!(display_price(50.0), "50 ADA");
        assert_eq!(display_price(12.5), "12.5 ADA");
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.5"), Some(12.5));
        assert_eq!(parse_price(" 50 "), Some(50.0));
        assert_eq!(parse_price("0"), None);
        assert_eq!(parse_price("-1"), None);
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("inf"), None);
        assert_eq!(parse_price(""), None);
    }
}
