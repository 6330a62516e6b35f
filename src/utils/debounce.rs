// ============================================================================
// SCAN DEBOUNCE - Supresión de lecturas repetidas del escáner
// ============================================================================
// El decodificador QR dispara el callback muchas veces por segundo mientras
// el código sigue frente a la cámara. Una lectura solo se acepta si pasó la
// ventana completa desde la última lectura Y el payload difiere del último
// procesado.
// ============================================================================

#[derive(Debug, Clone)]
pub struct ScanDebouncer {
    window_ms: i64,
    last_scan_ms: i64,
    last_payload: Option<String>,
}

impl ScanDebouncer {
    pub fn new(window_ms: i64) -> Self {
        Self {
            window_ms,
            last_scan_ms: 0,
            last_payload: None,
        }
    }

    /// Devuelve `true` si la lectura debe procesarse (disparar el consumo).
    /// Toda lectura que llega dentro de la ventana se descarta sin tocar el
    /// reloj; una lectura fuera de la ventana reinicia la ventana aunque el
    /// payload se repita.
    pub fn accept(&mut self, now_ms: i64, payload: &str) -> bool {
        if now_ms - self.last_scan_ms < self.window_ms {
            return false;
        }

        self.last_scan_ms = now_ms;

        if self.last_payload.as_deref() == Some(payload) {
            return false;
        }

        self.last_payload = Some(payload.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 10_000;

    #[test]
    fn dos_lecturas_del_mismo_codigo_dentro_de_la_ventana_una_sola_llamada() {
        let mut debouncer = ScanDebouncer::new(3_000);
        assert!(debouncer.accept(T0, "ana@usb.ve"));
        assert!(!debouncer.accept(T0 + 2_999, "ana@usb.ve"));
    }

    #[test]
    fn lecturas_separadas_por_mas_de_la_ventana_producen_dos_llamadas() {
        let mut debouncer = ScanDebouncer::new(3_000);
        assert!(debouncer.accept(T0, "ana@usb.ve"));
        assert!(debouncer.accept(T0 + 3_001, "carlos@usb.ve"));
    }

    #[test]
    fn codigos_distintos_dentro_de_la_ventana_tambien_se_descartan() {
        let mut debouncer = ScanDebouncer::new(3_000);
        assert!(debouncer.accept(T0, "ana@usb.ve"));
        assert!(!debouncer.accept(T0 + 1_000, "carlos@usb.ve"));
    }

    #[test]
    fn el_mismo_codigo_no_se_reprocesa_aunque_pase_la_ventana() {
        let mut debouncer = ScanDebouncer::new(3_000);
        assert!(debouncer.accept(T0, "ana@usb.ve"));
        assert!(!debouncer.accept(T0 + 5_000, "ana@usb.ve"));
        // La lectura rechazada igual reinició la ventana
        assert!(!debouncer.accept(T0 + 5_500, "carlos@usb.ve"));
        assert!(debouncer.accept(T0 + 9_000, "carlos@usb.ve"));
    }
}
