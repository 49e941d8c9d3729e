use urlencoding::encode;

pub const WHATSAPP_TEXT: &str =
    "Join me at ProductXcelerator - Turn Your Ideas into Reality! 🚀 #Innovation #ProductXcelerator #AICRAISE";
pub const LINKEDIN_TEXT: &str =
    "Excited to join ProductXcelerator - Turn Your Ideas into Reality! 🚀 #Innovation #ProductXcelerator #AICRAISE";

pub fn whatsapp_share_url(text: &str, page_url: &str) -> String {
    format!("https://wa.me/?text={}", encode(&format!("{} {}", text, page_url)))
}

pub fn linkedin_share_url(text: &str, page_url: &str) -> String {
    format!(
        "https://linkedin.com/sharing/share-offsite/?url={}&summary={}",
        encode(page_url),
        encode(text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whatsapp_link_encodes_text_and_url_together() {
        let url = whatsapp_share_url("Hi there", "https://x.test/?a=1");
        assert_eq!(url, "https://wa.me/?text=Hi%20there%20https%3A%2F%2Fx.test%2F%3Fa%3D1");
    }

    #[test]
    fn linkedin_link_keeps_url_and_summary_separate() {
        let url = linkedin_share_url("Go #team", "https://x.test/");
        assert_eq!(
            url,
            "https://linkedin.com/sharing/share-offsite/?url=https%3A%2F%2Fx.test%2F&summary=Go%20%23team"
        );
    }
}
