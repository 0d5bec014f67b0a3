//! User-facing text: amounts in the es-AR numeric format and error messages.

use crate::core::currency::ConversionError;

pub const CONNECTION_ERROR: &str = "Error de conexión. Verifica tu internet e intenta de nuevo.";
pub const MALFORMED_RESPONSE: &str = "La respuesta de la API no tiene el formato esperado.";

/// Formats with two decimals, `.` as thousands separator and `,` as decimal mark.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}

/// Maps an ExchangeRate-API `error-type` to a message. Unknown types are echoed.
pub fn api_error_message(error_type: &str) -> &str {
    match error_type {
        "quota-reached" => "Se ha alcanzado el límite de solicitudes del plan.",
        "inactive-account" => "La cuenta no está activa (confirma tu email).",
        "invalid-key" => "La API key no es válida.",
        "malformed-request" => "La solicitud no es correcta.",
        "unsupported-code" => "Código de moneda no soportado.",
        other => other,
    }
}

pub fn error_message(err: &ConversionError) -> String {
    match err {
        ConversionError::Api { error_type } => {
            format!("Error de la API: {}", api_error_message(error_type))
        }
        ConversionError::MalformedResponse(_) => format!("Error de la API: {MALFORMED_RESPONSE}"),
        ConversionError::Status(_) | ConversionError::Network(_) => CONNECTION_ERROR.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(50.0), "50,00");
        assert_eq!(format_amount(50000.0), "50.000,00");
        assert_eq!(format_amount(0.0), "0,00");
        assert_eq!(format_amount(999.999), "1.000,00");
        assert_eq!(format_amount(1234567.891), "1.234.567,89");
        assert_eq!(format_amount(100.0), "100,00");
        assert_eq!(format_amount(0.5), "0,50");
        assert_eq!(format_amount(-1234.5), "-1.234,50");
        assert_eq!(format_amount(-0.001), "0,00");
    }

    #[test]
    fn test_known_api_errors() {
        assert_eq!(api_error_message("invalid-key"), "La API key no es válida.");
        assert_eq!(
            api_error_message("quota-reached"),
            "Se ha alcanzado el límite de solicitudes del plan."
        );
        assert_eq!(
            api_error_message("unsupported-code"),
            "Código de moneda no soportado."
        );
    }

    #[test]
    fn test_unknown_api_error_is_echoed() {
        assert_eq!(api_error_message("foo-bar"), "foo-bar");
        assert_eq!(api_error_message("unknown"), "unknown");
    }

    #[test]
    fn test_error_message_by_kind() {
        let api = ConversionError::Api {
            error_type: "malformed-request".to_string(),
        };
        assert_eq!(
            error_message(&api),
            "Error de la API: La solicitud no es correcta."
        );
        assert_eq!(error_message(&ConversionError::Status(404)), CONNECTION_ERROR);
        assert_eq!(error_message(&ConversionError::Status(503)), CONNECTION_ERROR);
        assert_eq!(
            error_message(&ConversionError::MalformedResponse("x".to_string())),
            format!("Error de la API: {MALFORMED_RESPONSE}")
        );
    }
}
