use {
    serde::{
        de::{
            MapAccess,
            Visitor,
        },
        Deserialize,
        Deserializer,
        Serialize,
    },
    std::fmt,
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn spots_left(&self) -> i64 {
        return self.max_participants as i64 - self.participants.len() as i64;
    }
}

/// The full activity collection as returned by `GET /activities`. The server
/// sends a json object; entry order is the server's insertion order and the
/// page renders in that order, so this can't deserialize through a hash map.
#[derive(Clone, Debug, PartialEq)]
pub struct ActivityListing(pub Vec<(String, Activity)>);

impl<'de> Deserialize<'de> for ActivityListing {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ListingVisitor;

        impl<'de> Visitor<'de> for ListingVisitor {
            type Value = ActivityListing;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                return f.write_str("a map of activity name to activity details");
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut out = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, activity)) = access.next_entry::<String, Activity>()? {
                    out.push((name, activity));
                }
                return Ok(ActivityListing(out));
            }
        }

        return deserializer.deserialize_map(ListingVisitor);
    }
}

// 2xx body of the signup/unregister endpoints.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct SignupOk {
    pub message: String,
}

// Non-2xx body; `detail` is best-effort, the page falls back to a generic
// message when it's absent or the body doesn't parse.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "snake_case")]
pub struct ApiRejection {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{
        ActivityListing,
        ApiRejection,
        SignupOk,
    };

    #[test]
    fn listing_decodes_sample_payload() {
        let listing: ActivityListing =
            serde_json::from_str(
                "{\"Chess Club\": {\"description\":\"d\",\"schedule\":\"s\",\"max_participants\":2,\"participants\":[\"a@x.com\"]}}",
            ).unwrap();
        assert_eq!(listing.0.len(), 1);
        let (name, activity) = &listing.0[0];
        assert_eq!(name, "Chess Club");
        assert_eq!(activity.description, "d");
        assert_eq!(activity.schedule, "s");
        assert_eq!(activity.participants, vec!["a@x.com".to_string()]);
        assert_eq!(activity.spots_left(), 1);
    }

    #[test]
    fn listing_preserves_server_order() {
        let listing: ActivityListing =
            serde_json::from_str(
                "{\"Zebra Society\": {\"description\":\"\",\"schedule\":\"\",\"max_participants\":1,\"participants\":[]},\
                 \"Art Club\": {\"description\":\"\",\"schedule\":\"\",\"max_participants\":1,\"participants\":[]}}",
            ).unwrap();
        let names = listing.0.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Zebra Society", "Art Club"]);
    }

    #[test]
    fn listing_tolerates_missing_participants() {
        let listing: ActivityListing =
            serde_json::from_str(
                "{\"Chess Club\": {\"description\":\"d\",\"schedule\":\"s\",\"max_participants\":3}}",
            ).unwrap();
        assert!(listing.0[0].1.participants.is_empty());
        assert_eq!(listing.0[0].1.spots_left(), 3);
    }

    #[test]
    fn spots_left_full_activity_is_zero() {
        let listing: ActivityListing =
            serde_json::from_str(
                "{\"Chess Club\": {\"description\":\"d\",\"schedule\":\"s\",\"max_participants\":2,\"participants\":[\"a@x.com\",\"b@x.com\"]}}",
            ).unwrap();
        assert_eq!(listing.0[0].1.spots_left(), 0);
    }

    #[test]
    fn signup_ok_decodes() {
        let ok: SignupOk = serde_json::from_str("{\"message\":\"Signed up!\"}").unwrap();
        assert_eq!(ok.message, "Signed up!");
    }

    #[test]
    fn rejection_detail_is_optional() {
        let r: ApiRejection = serde_json::from_str("{\"detail\":\"Already signed up\"}").unwrap();
        assert_eq!(r.detail.as_deref(), Some("Already signed up"));
        let r: ApiRejection = serde_json::from_str("{}").unwrap();
        assert_eq!(r.detail, None);
    }
}
