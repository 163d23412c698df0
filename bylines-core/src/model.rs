use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// The person who posted an article
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub user_id: String,
    pub username: String,
    /// Avatar URL, only used by renderers
    pub picture: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpVote {
    #[serde(default)]
    pub up_voted_by: String,
    #[serde(default)]
    pub up_voted_by_username: String,
}

/// A single entry of the article feed.
///
/// Only `link` and `author` take part in graph construction, the remaining
/// fields are carried so a feed round-trips without losing display data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleRecord {
    #[serde(default, deserialize_with = "lenient")]
    pub id: String,
    pub link: String,
    #[serde(default)]
    pub author: Option<Author>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub time_posted: Option<i64>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub up_votes: Vec<UpVote>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub story_link: Option<String>,
}

/// Display-only fields never fail a feed: a value of the wrong shape
/// (null, float rank, stringly timestamp) decodes as the default.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

impl Author {
    pub fn new(user_id: &str, username: &str, picture: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            username: username.to_string(),
            picture: picture.to_string(),
        }
    }
}

impl ArticleRecord {
    pub fn new(id: &str, link: &str, author: Author) -> Self {
        Self {
            id: id.to_string(),
            link: link.to_string(),
            author: Some(author),
            headline: None,
            time_posted: None,
            meta_description: None,
            description: None,
            rank: None,
            up_votes: Vec::new(),
            image: None,
            story_link: None,
        }
    }

    pub fn without_author(id: &str, link: &str) -> Self {
        Self {
            author: None,
            ..Self::new(id, link, Author::new("", "", ""))
        }
    }

    pub fn upvote_count(&self) -> usize {
        self.up_votes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_feed_entry() {
        let json = r#"{
            "id": "57068e9be3fb2c240e0c8ef4",
            "headline": "How Internet of Things (IOT) is acting as a Master",
            "timePosted": 1460047515551,
            "link": "https://acadgild.com/blog/internet-things-iot/",
            "metaDescription": "",
            "description": "undefined",
            "rank": 1,
            "upVotes": [
                { "upVotedBy": "56aa5599d1c119b24c18dcc9", "upVotedByUsername": "1234576" }
            ],
            "author": {
                "picture": "https://avatars.githubusercontent.com/u/15155428?v=3",
                "userId": "56aa5599d1c119b24c18dcc9",
                "username": "1234576"
            },
            "image": "https://acadgild.com/blog/wp-content/uploads/2016/03/IOT.jpg",
            "storyLink": "how internet of things iot is acting as a master"
        }"#;

        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "57068e9be3fb2c240e0c8ef4");
        assert_eq!(article.time_posted, Some(1460047515551));
        assert_eq!(article.upvote_count(), 1);
        let author = article.author.unwrap();
        assert_eq!(author.user_id, "56aa5599d1c119b24c18dcc9");
        assert_eq!(author.username, "1234576");
    }

    #[test]
    fn test_missing_author_deserializes_as_none() {
        let json = r#"{ "id": "a1", "link": "https://example.com/x" }"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert!(article.author.is_none());
        assert!(article.up_votes.is_empty());
    }

    #[test]
    fn test_null_author_deserializes_as_none() {
        let json = r#"{ "id": "a1", "link": "https://example.com/x", "author": null }"#;
        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert!(article.author.is_none());
    }

    #[test]
    fn test_malformed_display_fields_decode_as_defaults() {
        let json = r#"{
            "id": 42,
            "link": "https://acadgild.com/blog/x",
            "headline": ["not", "a", "string"],
            "timePosted": "1460047515551",
            "rank": 1.5,
            "upVotes": null,
            "image": false,
            "author": { "userId": "u1", "username": "alice", "picture": "p" }
        }"#;

        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "");
        assert_eq!(article.headline, None);
        assert_eq!(article.time_posted, None);
        assert_eq!(article.rank, None);
        assert!(article.up_votes.is_empty());
        assert_eq!(article.image, None);
        assert_eq!(article.author.unwrap().user_id, "u1");
    }

    #[test]
    fn test_upvote_without_voter_id() {
        let json = r#"{
            "link": "https://acadgild.com/blog/x",
            "upVotes": [{ "upVotedByUsername": "x" }]
        }"#;

        let article: ArticleRecord = serde_json::from_str(json).unwrap();
        assert_eq!(article.upvote_count(), 1);
        assert_eq!(article.up_votes[0].up_voted_by, "");
        assert_eq!(article.up_votes[0].up_voted_by_username, "x");
    }

    #[test]
    fn test_author_requires_user_id() {
        let json = r#"{ "link": "https://example.com/x", "author": { "username": "u", "picture": "p" } }"#;
        assert!(serde_json::from_str::<ArticleRecord>(json).is_err());
    }
}
