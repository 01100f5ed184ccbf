use teloxide::utils::html;

/// Diagnostic category for a failed transcription request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    AuthInvalid,
    RateLimited,
    PayloadTooLarge,
    InsufficientQuota,
    Timeout,
    Unknown,
}

/// Checked top to bottom, first match wins. A message carrying both "401"
/// and "timeout" is AuthInvalid.
const SIGNATURES: &[(&[&str], FailureKind)] = &[
    (&["401", "incorrect api key"], FailureKind::AuthInvalid),
    (&["429", "rate limit"], FailureKind::RateLimited),
    (&["413", "too large"], FailureKind::PayloadTooLarge),
    (&["insufficient_quota"], FailureKind::InsufficientQuota),
    (&["timeout", "timed out"], FailureKind::Timeout),
];

impl FailureKind {
    pub fn classify(raw: &str) -> FailureKind {
        let lowered = raw.to_lowercase();
        for (needles, kind) in SIGNATURES {
            if needles.iter().any(|needle| lowered.contains(needle)) {
                return *kind;
            }
        }
        FailureKind::Unknown
    }

    fn hint(self, raw: &str) -> String {
        match self {
            FailureKind::AuthInvalid => "🔎 <b>Posible causa:</b> API key de OpenAI inválida o expirada.\n\
                 💡 <b>Solución:</b> Verifica tu clave en https://platform.openai.com/api-keys"
                .to_string(),
            FailureKind::RateLimited => "🔎 <b>Posible causa:</b> Has superado el límite de uso de la API.\n\
                 💡 <b>Solución:</b> Espera unos minutos o revisa tu plan en https://platform.openai.com/usage"
                .to_string(),
            FailureKind::PayloadTooLarge => "🔎 <b>Posible causa:</b> El archivo es demasiado grande para Whisper (máx. 25 MB).\n\
                 💡 <b>Solución:</b> Comprime el audio o divídelo en partes más cortas."
                .to_string(),
            FailureKind::InsufficientQuota => "🔎 <b>Posible causa:</b> No tienes créditos suficientes en OpenAI.\n\
                 💡 <b>Solución:</b> Añade saldo en https://platform.openai.com/settings/organization/billing/overview"
                .to_string(),
            FailureKind::Timeout => "🔎 <b>Posible causa:</b> El audio es muy largo y la API tardó demasiado.\n\
                 💡 <b>Solución:</b> Intenta con un audio más corto (&lt; 10 min recomendado)."
                .to_string(),
            FailureKind::Unknown => format!(
                "🔎 <b>Para investigar:</b> Busca el error en Google con:\n<code>OpenAI Whisper API {}</code>",
                html::escape(&truncate_chars(raw, 80))
            ),
        }
    }
}

/// Error block shown to the user in place of the "processing" notice.
pub fn error_block(raw: &str) -> String {
    let hint = FailureKind::classify(raw).hint(raw);
    format!(
        "❌ <b>Error al transcribir:</b>\n\n<code>{}</code>\n\n{}",
        html::escape(&truncate_chars(raw, 500)),
        hint
    )
}

fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_signature_maps_to_its_category() {
        assert_eq!(
            FailureKind::classify("status 401 Unauthorized"),
            FailureKind::AuthInvalid
        );
        assert_eq!(
            FailureKind::classify("Incorrect API key provided"),
            FailureKind::AuthInvalid
        );
        assert_eq!(
            FailureKind::classify("status 429: slow down"),
            FailureKind::RateLimited
        );
        assert_eq!(
            FailureKind::classify("you hit a rate limit"),
            FailureKind::RateLimited
        );
        assert_eq!(
            FailureKind::classify("status 413 Payload Too Large"),
            FailureKind::PayloadTooLarge
        );
        assert_eq!(
            FailureKind::classify("the file is too large"),
            FailureKind::PayloadTooLarge
        );
        assert_eq!(
            FailureKind::classify("{\"error\":{\"code\":\"insufficient_quota\"}}"),
            FailureKind::InsufficientQuota
        );
        assert_eq!(
            FailureKind::classify("operation timed out"),
            FailureKind::Timeout
        );
        assert_eq!(
            FailureKind::classify("connect timeout"),
            FailureKind::Timeout
        );
    }

    #[test]
    fn first_signature_wins() {
        assert_eq!(
            FailureKind::classify("status 401: request timed out"),
            FailureKind::AuthInvalid
        );
        assert_eq!(
            FailureKind::classify("rate limit hit, retry timed out"),
            FailureKind::RateLimited
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(
            FailureKind::classify("RATE LIMIT exceeded"),
            FailureKind::RateLimited
        );
        assert_eq!(
            FailureKind::classify("Request Timed Out"),
            FailureKind::Timeout
        );
        assert_eq!(
            FailureKind::classify("INCORRECT API KEY"),
            FailureKind::AuthInvalid
        );
    }

    #[test]
    fn anything_else_is_unknown() {
        assert_eq!(
            FailureKind::classify("connection reset by peer"),
            FailureKind::Unknown
        );
        assert_eq!(FailureKind::classify(""), FailureKind::Unknown);
    }

    #[test]
    fn block_truncates_the_raw_message_to_500_chars() {
        let raw = "x".repeat(600);
        let block = error_block(&raw);
        assert!(block.contains(&"x".repeat(500)));
        assert!(!block.contains(&"x".repeat(501)));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        let raw = "í".repeat(600);
        assert_eq!(truncate_chars(&raw, 500).chars().count(), 500);
    }

    #[test]
    fn unknown_block_carries_a_search_hint() {
        let raw = format!("weird failure {}", "y".repeat(100));
        let block = error_block(&raw);
        assert!(block.contains("OpenAI Whisper API "));
        assert!(block.contains(&truncate_chars(&raw, 80)));
        assert!(!block.contains("Posible causa"));
    }

    #[test]
    fn classified_block_carries_cause_and_remedy() {
        let block = error_block("status 429: rate limit");
        assert!(block.starts_with("❌ <b>Error al transcribir:</b>"));
        assert!(block.contains("Posible causa"));
        assert!(block.contains("Solución"));
        assert!(block.contains("platform.openai.com/usage"));
    }

    #[test]
    fn raw_message_is_html_escaped() {
        let block = error_block("unexpected <eof> & more");
        assert!(block.contains("&lt;eof&gt; &amp; more"));
    }
}
