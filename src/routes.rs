// ============================================================================
// ROUTES - Rutas de la app y guard por rol
// ============================================================================
// El guard es una función pura: (autenticado, rol, ruta) → permitir o
// redirigir. La parte que toca el DOM (pathname, pushState) vive en
// components/app.rs.
// ============================================================================

use crate::models::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Landing / sign-in.
    Home,
    /// Carnet del usuario con su QR.
    Dashboard,
    /// Tickets del usuario.
    DashboardTickets,
    /// Panel admin: estadísticas + tabla.
    Admin,
    /// Tabla completa de tickets con filtros.
    AdminTickets,
    /// Emisión de tickets.
    AdminCreateTickets,
    /// Lector QR para consumir tickets.
    AdminScanner,
}

impl Route {
    pub fn from_path(path: &str) -> Route {
        match path.trim_end_matches('/') {
            "/dashboard" => Route::Dashboard,
            "/dashboard/tickets" => Route::DashboardTickets,
            "/admin" => Route::Admin,
            "/admin/tickets" => Route::AdminTickets,
            "/admin/tickets/crear" => Route::AdminCreateTickets,
            "/admin/escanear" => Route::AdminScanner,
            _ => Route::Home,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Dashboard => "/dashboard",
            Route::DashboardTickets => "/dashboard/tickets",
            Route::Admin => "/admin",
            Route::AdminTickets => "/admin/tickets",
            Route::AdminCreateTickets => "/admin/tickets/crear",
            Route::AdminScanner => "/admin/escanear",
        }
    }

    pub fn is_admin_area(&self) -> bool {
        matches!(
            self,
            Route::Admin | Route::AdminTickets | Route::AdminCreateTickets | Route::AdminScanner
        )
    }

    pub fn is_dashboard_area(&self) -> bool {
        matches!(self, Route::Dashboard | Route::DashboardTickets)
    }

    /// Home de cada rol después del sign-in.
    pub fn role_home(role: Role) -> Route {
        match role {
            Role::Admin => Route::Admin,
            Role::User => Route::Dashboard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

/// Decide si la navegación se permite o a dónde se redirige.
pub fn guard(role: Option<Role>, route: Route) -> RouteDecision {
    match role {
        None => {
            // Visitantes sin sesión solo ven la landing
            if route == Route::Home {
                RouteDecision::Allow
            } else {
                RouteDecision::Redirect(Route::Home)
            }
        }
        Some(role) => {
            if route == Route::Home {
                return RouteDecision::Redirect(Route::role_home(role));
            }
            if role.is_admin() && route.is_dashboard_area() {
                return RouteDecision::Redirect(Route::Admin);
            }
            if !role.is_admin() && route.is_admin_area() {
                return RouteDecision::Redirect(Route::Dashboard);
            }
            RouteDecision::Allow
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rutas_desconocidas_caen_en_home() {
        assert_eq!(Route::from_path("/"), Route::Home);
        assert_eq!(Route::from_path("/otra-cosa"), Route::Home);
        assert_eq!(Route::from_path("/admin/escanear/"), Route::AdminScanner);
    }

    #[test]
    fn sin_sesion_redirige_a_la_landing() {
        for route in [
            Route::Dashboard,
            Route::DashboardTickets,
            Route::Admin,
            Route::AdminTickets,
            Route::AdminScanner,
        ] {
            assert_eq!(guard(None, route), RouteDecision::Redirect(Route::Home));
        }
        assert_eq!(guard(None, Route::Home), RouteDecision::Allow);
    }

    #[test]
    fn admin_no_entra_al_dashboard_de_usuario() {
        assert_eq!(
            guard(Some(Role::Admin), Route::DashboardTickets),
            RouteDecision::Redirect(Route::Admin)
        );
        assert_eq!(
            guard(Some(Role::Admin), Route::AdminTickets),
            RouteDecision::Allow
        );
    }

    #[test]
    fn usuario_no_entra_al_area_admin() {
        assert_eq!(
            guard(Some(Role::User), Route::Admin),
            RouteDecision::Redirect(Route::Dashboard)
        );
        assert_eq!(
            guard(Some(Role::User), Route::DashboardTickets),
            RouteDecision::Allow
        );
    }

    #[test]
    fn la_landing_redirige_al_home_del_rol() {
        assert_eq!(
            guard(Some(Role::Admin), Route::Home),
            RouteDecision::Redirect(Route::Admin)
        );
        assert_eq!(
            guard(Some(Role::User), Route::Home),
            RouteDecision::Redirect(Route::Dashboard)
        );
    }
}
