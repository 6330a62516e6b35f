use chrono::{DateTime, Datelike};

const MESES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Formatea una fecha ISO del backend como "1 de febrero de 2025".
/// Devuelve `None` si el valor no es una fecha válida.
pub fn format_fecha_larga(value: &str) -> Option<String> {
    let date = DateTime::parse_from_rfc3339(value).ok()?;
    let mes = MESES.get(date.month0() as usize)?;
    Some(format!("{} de {} de {}", date.day(), mes, date.year()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formatea_fechas_del_backend() {
        assert_eq!(
            format_fecha_larga("2025-02-01T12:30:00.000Z"),
            Some("1 de febrero de 2025".to_string())
        );
    }

    #[test]
    fn fechas_invalidas_devuelven_none() {
        assert_eq!(format_fecha_larga("no es fecha"), None);
        assert_eq!(format_fecha_larga(""), None);
    }
}
