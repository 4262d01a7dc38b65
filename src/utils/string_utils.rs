/// Utilitários de string para logs

/// Mascara um token/segredo para log, mantendo no máximo `visible` caracteres
/// iniciais (sem cortar caracteres UTF-8 no meio).
///
/// # Exemplo
/// ```
/// use igdb_search_gateway::utils::string_utils::mask_secret;
///
/// assert_eq!(mask_secret("abcdef123456", 4), "abcd...");
/// assert_eq!(mask_secret("abc", 4), "***");
/// ```
pub fn mask_secret(s: &str, visible: usize) -> String {
    // Segredos curtos não são revelados nem parcialmente
    if s.chars().count() <= visible {
        return "***".to_string();
    }

    let prefix: String = s.chars().take(visible).collect();
    format!("{}...", prefix)
}
