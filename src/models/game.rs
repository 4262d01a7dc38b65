use serde::{Deserialize, Deserializer, Serialize};

/// `null` vira o valor padrão do tipo (campo ausente é tratado por `#[serde(default)]`)
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Jogo retornado pela API da IGDB
///
/// A IGDB omite campos sem dados (jogos sem resumo ou sem data de
/// lançamento) ou os envia como `null`, por isso apenas `id` é obrigatório.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub first_release_date: i64,  // timestamp unix em segundos
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: String,
}
