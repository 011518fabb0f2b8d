use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::warn;

const DEFAULT_TITLE: &str = "No Title";
const DEFAULT_LINK: &str = "#";

// Note: every field uses the custom deserializer so a null or a number never rejects the whole record
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LiveRecord {
    #[serde(default, deserialize_with = "deserialize_str")]
    pub date: String,
    #[serde(default = "default_title", deserialize_with = "deserialize_str")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub place: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub open_start: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub ticket: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub act: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub access: String,
    #[serde(default, deserialize_with = "deserialize_str")]
    pub image: String,
    #[serde(default = "default_link", deserialize_with = "deserialize_str")]
    pub link: String,
}

#[cfg(test)]
impl LiveRecord {
    pub fn dated(date: &str) -> Self {
        Self {
            date: date.to_string(),
            title: default_title(),
            place: String::new(),
            open_start: String::new(),
            ticket: String::new(),
            act: String::new(),
            access: String::new(),
            image: String::new(),
            link: default_link(),
        }
    }
}

pub fn parse_lives(json: &str) -> Result<Vec<LiveRecord>, serde_json::Error> {
    let values = serde_json::from_str::<Vec<Value>>(json)?;

    Ok(values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match value {
            // A derived struct also deserializes from a sequence, so only objects get through
            Value::Object(_) => match serde_json::from_value::<LiveRecord>(value) {
                Ok(record) => Some(record),
                Err(err) => {
                    warn!("Skipping live #{}: {}", index, err);
                    None
                }
            },
            other => {
                warn!("Skipping live #{} that isn't an object: {}", index, other);
                None
            }
        })
        .collect())
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_link() -> String {
    DEFAULT_LINK.to_string()
}

fn deserialize_str<'de, D>(d: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(d)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test_log::test]
    fn should_deserialize_full_live() {
        let lives = parse_lives(
            r##"
              [{
                "date": "2030-05-05",
                "title": "ワンマンライブ",
                "place": "下北沢SHELTER",
                "open_start": "18:30/19:00",
                "ticket": "前売 ¥3,000",
                "act": "The Example Band",
                "access": "下北沢駅 徒歩3分",
                "image": "images/flyer.jpg",
                "link": "https://example.com/tickets"
              }]"##,
        )
        .unwrap();

        assert_eq!(lives.len(), 1);

        let live = lives.first().unwrap();

        assert_eq!(live.date, "2030-05-05");
        assert_eq!(live.title, "ワンマンライブ");
        assert_eq!(live.place, "下北沢SHELTER");
        assert_eq!(live.open_start, "18:30/19:00");
        assert_eq!(live.ticket, "前売 ¥3,000");
        assert_eq!(live.act, "The Example Band");
        assert_eq!(live.access, "下北沢駅 徒歩3分");
        assert_eq!(live.image, "images/flyer.jpg");
        assert_eq!(live.link, "https://example.com/tickets");
    }

    #[test_log::test]
    fn when_fields_are_missing_should_use_defaults() {
        let lives = parse_lives(r#"[{"place": "Hall X"}]"#).unwrap();

        let live = lives.first().unwrap();

        assert_eq!(live.date, "");
        assert_eq!(live.title, "No Title");
        assert_eq!(live.place, "Hall X");
        assert_eq!(live.image, "");
        assert_eq!(live.link, "#");
    }

    #[test_log::test]
    fn when_fields_are_not_strings_should_read_them_as_empty() {
        let lives =
            parse_lives(r#"[{"date": 20300505, "title": null, "ticket": {"price": 3000}}]"#)
                .unwrap();

        let live = lives.first().unwrap();

        assert_eq!(live.date, "");
        assert_eq!(live.title, "");
        assert_eq!(live.ticket, "");
    }

    #[test_log::test]
    fn should_skip_elements_that_are_not_objects() {
        let lives = parse_lives(
            r#"[1, "2030-01-01", ["2099-01-01", "Array Show", "Hall"], {"date": "2030-01-01"}, null, []]"#,
        )
        .unwrap();

        assert_eq!(lives, vec![LiveRecord::dated("2030-01-01")]);
    }

    #[test_log::test]
    fn when_document_is_not_an_array_should_fail() {
        assert!(parse_lives(r#"{"date": "2030-01-01"}"#).is_err());
        assert!(parse_lives("[{").is_err());
    }
}
