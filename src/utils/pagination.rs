// ============================================================================
// PAGINATION - Aritmética de paginación server-driven
// ============================================================================
// El total viene del backend (`meta.total`) y se confía en él tal cual.
// ============================================================================

/// Cantidad de páginas para un total reportado por el backend.
pub fn page_count(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size as u64) as u32
}

/// Rango "Mostrando X a Y de N" (1-based). `None` si no hay filas.
pub fn display_range(total: u64, page_index: u32, page_size: u32) -> Option<(u64, u64)> {
    if total == 0 || page_size == 0 {
        return None;
    }
    let start = page_index as u64 * page_size as u64 + 1;
    if start > total {
        return None;
    }
    let end = (start + page_size as u64 - 1).min(total);
    Some((start, end))
}

pub fn can_previous(page_index: u32) -> bool {
    page_index > 0
}

pub fn can_next(total: u64, page_index: u32, page_size: u32) -> bool {
    page_index + 1 < page_count(total, page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_23_con_paginas_de_5_son_5_paginas() {
        assert_eq!(page_count(23, 5), 5);
        // La última página muestra 3 filas
        assert_eq!(display_range(23, 4, 5), Some((21, 23)));
    }

    #[test]
    fn total_exacto_no_agrega_pagina_extra() {
        assert_eq!(page_count(20, 5), 4);
        assert_eq!(display_range(20, 3, 5), Some((16, 20)));
    }

    #[test]
    fn sin_filas_no_hay_rango() {
        assert_eq!(page_count(0, 5), 0);
        assert_eq!(display_range(0, 0, 5), None);
    }

    #[test]
    fn navegacion_se_bloquea_en_los_bordes() {
        assert!(!can_previous(0));
        assert!(can_previous(1));
        assert!(can_next(23, 0, 5));
        assert!(!can_next(23, 4, 5));
    }
}
