use {
    percent_encoding::{
        percent_decode_str,
        utf8_percent_encode,
        AsciiSet,
        NON_ALPHANUMERIC,
    },
    serde::Serialize,
};

// Same escape set as js `encodeURIComponent`.
const COMPONENT: &AsciiSet =
    &NON_ALPHANUMERIC
        .remove(b'-')
        .remove(b'_')
        .remove(b'.')
        .remove(b'!')
        .remove(b'~')
        .remove(b'*')
        .remove(b'\'')
        .remove(b'(')
        .remove(b')');

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
struct SignupQuery<'a> {
    email: &'a str,
}

/// Escape a value for use as a url path segment or a dom data attribute.
pub fn encode_component(v: &str) -> String {
    return utf8_percent_encode(v, COMPONENT).to_string();
}

pub fn decode_component(v: &str) -> Result<String, String> {
    return Ok(
        percent_decode_str(v)
            .decode_utf8()
            .map_err(|e| format!("Invalid percent-encoded value [{}]: {}", v, e))?
            .into_owned(),
    );
}

pub fn activities_url() -> String {
    return format!("/activities");
}

pub fn signup_url(activity: &str, email: &str) -> String {
    return format!(
        "/activities/{}/signup?{}",
        encode_component(activity),
        serde_urlencoded::to_string(SignupQuery { email: email }).unwrap()
    );
}

#[cfg(test)]
mod tests {
    use super::{
        decode_component,
        encode_component,
        signup_url,
    };

    #[test]
    fn component_round_trip() {
        for original in ["Art & Crafts", "#1 club", "a+b@x.com", "two  spaces", "plain"] {
            let encoded = encode_component(original);
            assert_eq!(decode_component(&encoded).unwrap(), original);
        }
    }

    #[test]
    fn component_escapes_reserved_characters() {
        assert_eq!(encode_component("Chess Club"), "Chess%20Club");
        assert_eq!(encode_component("a&b#c+d"), "a%26b%23c%2Bd");
    }

    #[test]
    fn signup_url_shape() {
        assert_eq!(signup_url("Chess Club", "a@x.com"), "/activities/Chess%20Club/signup?email=a%40x.com");
        assert_eq!(signup_url("Art & Crafts", "a+b@x.com"), "/activities/Art%20%26%20Crafts/signup?email=a%2Bb%40x.com");
    }

    #[test]
    fn decode_rejects_truncated_escape() {
        assert!(decode_component("%E2%82").is_err());
    }
}
