//! Spanish weekday names as persisted in `psicologo_disponibilidad.day`

use chrono::Weekday;

/// Persisted day name for a weekday
#[must_use]
pub fn weekday_to_dia(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "lunes",
        Weekday::Tue => "martes",
        Weekday::Wed => "miercoles",
        Weekday::Thu => "jueves",
        Weekday::Fri => "viernes",
        Weekday::Sat => "sabado",
        Weekday::Sun => "domingo",
    }
}

/// Parse a persisted day name (accented spellings from older rows accepted)
#[must_use]
pub fn dia_to_weekday(dia: &str) -> Option<Weekday> {
    match dia.trim().to_lowercase().as_str() {
        "lunes" => Some(Weekday::Mon),
        "martes" => Some(Weekday::Tue),
        "miercoles" | "miércoles" => Some(Weekday::Wed),
        "jueves" => Some(Weekday::Thu),
        "viernes" => Some(Weekday::Fri),
        "sabado" | "sábado" => Some(Weekday::Sat),
        "domingo" => Some(Weekday::Sun),
        _ => None,
    }
}
