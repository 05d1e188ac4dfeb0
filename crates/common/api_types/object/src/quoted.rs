//! Optional form of `serde_utils::quoted_u64` for fields a node may leave out
//! or send as `null`. Pair with `#[serde(default)]`.

pub mod quoted_u64_opt {
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_utils::quoted_u64;

    #[derive(Deserialize)]
    struct Quoted(#[serde(with = "quoted_u64")] u64);

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => quoted_u64::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<Quoted>::deserialize(deserializer)?.map(|Quoted(value)| value))
    }
}
