// ============================================================================
// APP - Raíz de la aplicación: sesión + router con guard por rol
// ============================================================================
// La ruta efectiva se calcula de forma síncrona con el guard antes de
// renderizar, así nunca se pinta una página que el rol no puede ver. La URL
// se sincroniza después, en un efecto.
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::{
    AdminTicketsTable, CreateTicketForm, LoginScreen, Navbar, QrScannerPage, TicketStats,
    TicketsTable, UserCard,
};
use crate::hooks::{FilterContextProvider, SessionContextProvider, UseSessionHandle};
use crate::routes::{guard, Route, RouteDecision};

fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .map(|path| Route::from_path(&path))
        .unwrap_or(Route::Home)
}

fn push_route(route: Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Ok(history) = window.history() {
        if let Err(e) = history.push_state_with_url(&JsValue::NULL, "", Some(route.path())) {
            log::warn!("⚠️ pushState falló: {:?}", e);
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <SessionContextProvider>
            <Router />
        </SessionContextProvider>
    }
}

#[function_component(Router)]
fn router() -> Html {
    let session_handle =
        use_context::<UseSessionHandle>().expect("Router requiere SessionContextProvider");
    let route = use_state(current_route);

    // Botón atrás/adelante del navegador
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let closure = Closure::<dyn FnMut()>::new(move || route.set(current_route()));
            if let Some(window) = web_sys::window() {
                let _ = window
                    .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
            }
            // El listener vive tanto como la app
            closure.forget();
            || ()
        });
    }

    if *session_handle.restoring {
        return html! {
            <div class="app-loading">
                <div class="spinner"></div>
                <p>{"Cargando..."}</p>
            </div>
        };
    }

    let role = session_handle.session.as_ref().map(|u| u.role);
    let effective = match guard(role, *route) {
        RouteDecision::Allow => *route,
        RouteDecision::Redirect(target) => target,
    };

    // La URL refleja la ruta efectiva (incluye redirecciones del guard)
    use_effect_with(effective, move |effective| {
        if current_route() != *effective {
            push_route(*effective);
        }
        || ()
    });

    let on_navigate = {
        let route = route.clone();
        Callback::from(move |target: Route| {
            push_route(target);
            route.set(target);
        })
    };

    let Some(user) = (*session_handle.session).clone() else {
        return html! { <LoginScreen /> };
    };

    let navbar = html! {
        <Navbar
            user={user.clone()}
            current={effective}
            on_navigate={on_navigate}
            on_sign_out={session_handle.sign_out.clone()}
        />
    };

    let page = match effective {
        Route::Home => html! { <LoginScreen /> },
        Route::Dashboard => html! { <UserCard user={user.clone()} /> },
        Route::DashboardTickets => html! { <TicketsTable user_id={user.id.clone()} /> },
        Route::Admin => html! {
            <FilterContextProvider>
                <TicketStats />
                <AdminTicketsTable show_filters={false} />
            </FilterContextProvider>
        },
        Route::AdminTickets => html! {
            <FilterContextProvider>
                <AdminTicketsTable />
            </FilterContextProvider>
        },
        Route::AdminCreateTickets => html! { <CreateTicketForm /> },
        Route::AdminScanner => html! { <QrScannerPage /> },
    };

    html! {
        <div class="app">
            {navbar}
            <main class="app-content">{page}</main>
        </div>
    }
}
