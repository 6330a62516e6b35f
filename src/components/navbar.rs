use yew::prelude::*;

use crate::models::SessionUser;
use crate::routes::Route;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub user: SessionUser,
    pub current: Route,
    pub on_navigate: Callback<Route>,
    pub on_sign_out: Callback<()>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let links: &[(Route, &str)] = if props.user.role.is_admin() {
        &[
            (Route::Admin, "Inicio"),
            (Route::AdminTickets, "Tickets"),
            (Route::AdminCreateTickets, "Crear Tickets"),
            (Route::AdminScanner, "Escanear"),
        ]
    } else {
        &[
            (Route::Dashboard, "Mi Carnet"),
            (Route::DashboardTickets, "Mis Tickets"),
        ]
    };

    let render_link = |route: Route, label: &str| {
        let on_navigate = props.on_navigate.clone();
        let class = if props.current == route {
            "nav-link active"
        } else {
            "nav-link"
        };
        let onclick = Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(route);
        });
        html! {
            <a href={route.path()} {class} {onclick}>{label}</a>
        }
    };

    html! {
        <nav class="navbar">
            <div class="navbar-brand">
                <span class="navbar-logo">{"🍽️"}</span>
                <span class="navbar-title">{"Comedores USB"}</span>
            </div>

            <div class="navbar-links">
                { for links.iter().map(|(route, label)| render_link(*route, label)) }
            </div>

            <div class="navbar-user">
                if let Some(avatar) = &props.user.avatar {
                    <img class="navbar-avatar" src={avatar.clone()} alt="avatar" />
                }
                <span class="navbar-username">{&props.user.name}</span>
                <button
                    class="btn-logout"
                    onclick={props.on_sign_out.reform(|_| ())}
                >
                    {"Cerrar sesión"}
                </button>
            </div>
        </nav>
    }
}
