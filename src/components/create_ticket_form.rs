// ============================================================================
// CREATE TICKET FORM - Emisión de tickets desde el panel admin
// ============================================================================
// Combobox de usuarios con búsqueda local (la lista completa ya está en
// memoria), cantidad y precio con validación inline. El backend crea los
// tickets en lote.
// ============================================================================

use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_users;
use crate::models::BackendUser;
use crate::services::ApiClient;

#[derive(Clone, PartialEq, Default)]
struct FormErrors {
    user: Option<&'static str>,
    quantity: Option<&'static str>,
    price: Option<&'static str>,
}

impl FormErrors {
    fn is_empty(&self) -> bool {
        self.user.is_none() && self.quantity.is_none() && self.price.is_none()
    }
}

fn validate(user: &Option<BackendUser>, quantity: &str, price: &str) -> FormErrors {
    let mut errors = FormErrors::default();

    if user.is_none() {
        errors.user = Some("Debe seleccionar un usuario");
    }
    match quantity.parse::<u32>() {
        Ok(q) if q >= 1 => {}
        _ => errors.quantity = Some("La cantidad debe ser al menos 1"),
    }
    match price.parse::<f64>() {
        Ok(p) if p >= 0.0 => {}
        _ => errors.price = Some("El precio no puede ser negativo"),
    }

    errors
}

#[function_component(CreateTicketForm)]
pub fn create_ticket_form() -> Html {
    let users_handle = use_users();

    let selected_user = use_state(|| None::<BackendUser>);
    let user_search = use_state(String::new);
    let dropdown_open = use_state(|| false);
    let quantity = use_state(|| "1".to_string());
    let price = use_state(|| "0".to_string());

    let errors = use_state(FormErrors::default);
    let submitting = use_state(|| false);
    let feedback = use_state(|| None::<Result<String, String>>);

    let on_search = {
        let user_search = user_search.clone();
        let selected_user = selected_user.clone();
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            user_search.set(input.value());
            selected_user.set(None);
            dropdown_open.set(true);
        })
    };

    let on_focus_search = {
        let dropdown_open = dropdown_open.clone();
        Callback::from(move |_: FocusEvent| dropdown_open.set(true))
    };

    let on_quantity = {
        let quantity = quantity.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            quantity.set(input.value());
        })
    };

    let on_price = {
        let price = price.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            price.set(input.value());
        })
    };

    let on_submit = {
        let selected_user = selected_user.clone();
        let quantity = quantity.clone();
        let price = price.clone();
        let errors = errors.clone();
        let submitting = submitting.clone();
        let feedback = feedback.clone();
        let user_search = user_search.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let validation = validate(&selected_user, &quantity, &price);
            if !validation.is_empty() {
                errors.set(validation);
                return;
            }
            errors.set(FormErrors::default());

            let Some(user) = (*selected_user).clone() else {
                return;
            };
            let parsed_quantity: u32 = quantity.parse().unwrap_or(1);
            let parsed_price: f64 = price.parse().unwrap_or(0.0);

            let selected_user = selected_user.clone();
            let quantity = quantity.clone();
            let price = price.clone();
            let submitting = submitting.clone();
            let feedback = feedback.clone();
            let user_search = user_search.clone();

            wasm_bindgen_futures::spawn_local(async move {
                submitting.set(true);
                feedback.set(None);

                match ApiClient::new()
                    .create_tickets(parsed_price, parsed_quantity, &user.id)
                    .await
                {
                    Ok(message) => {
                        feedback.set(Some(Ok(message)));
                        // Éxito: el formulario vuelve a su estado inicial
                        selected_user.set(None);
                        user_search.set(String::new());
                        quantity.set("1".to_string());
                        price.set("0".to_string());
                    }
                    Err(e) => feedback.set(Some(Err(e))),
                }

                submitting.set(false);
            });
        })
    };

    let matching: Vec<BackendUser> = users_handle
        .users
        .iter()
        .filter(|u| u.matches_query(&user_search))
        .cloned()
        .collect();

    let search_display = match &*selected_user {
        Some(user) => user.display_label(),
        None => (*user_search).clone(),
    };

    html! {
        <form class="create-ticket-form" onsubmit={on_submit}>
            <h2>{"Emitir Tickets"}</h2>

            <div class="form-field">
                <label>{"Usuario"}</label>
                <input
                    class="user-combobox"
                    placeholder="Buscar usuario por nombre o correo..."
                    value={search_display}
                    oninput={on_search}
                    onfocus={on_focus_search}
                />
                if *dropdown_open && selected_user.is_none() {
                    <ul class="user-dropdown">
                        {
                            if *users_handle.loading {
                                html! { <li class="dropdown-message">{"Cargando usuarios..."}</li> }
                            } else if matching.is_empty() {
                                html! { <li class="dropdown-message">{"Sin resultados"}</li> }
                            } else {
                                html! {
                                    <>
                                    { for matching.iter().map(|user| {
                                        let selected_user = selected_user.clone();
                                        let dropdown_open = dropdown_open.clone();
                                        let user = user.clone();
                                        let label = user.display_label();
                                        let onclick = Callback::from(move |_: MouseEvent| {
                                            selected_user.set(Some(user.clone()));
                                            dropdown_open.set(false);
                                        });
                                        html! {
                                            <li key={label.clone()} class="dropdown-option" {onclick}>
                                                {label}
                                            </li>
                                        }
                                    }) }
                                    </>
                                }
                            }
                        }
                    </ul>
                }
                if let Some(msg) = errors.user {
                    <p class="field-error">{msg}</p>
                }
            </div>

            <div class="form-field">
                <label>{"Cantidad"}</label>
                <input
                    type="number"
                    min="1"
                    value={(*quantity).clone()}
                    oninput={on_quantity}
                />
                if let Some(msg) = errors.quantity {
                    <p class="field-error">{msg}</p>
                }
            </div>

            <div class="form-field">
                <label>{"Precio por ticket ($)"}</label>
                <input
                    type="number"
                    min="0"
                    step="0.01"
                    value={(*price).clone()}
                    oninput={on_price}
                />
                if let Some(msg) = errors.price {
                    <p class="field-error">{msg}</p>
                }
            </div>

            {
                match &*feedback {
                    Some(Ok(message)) => html! { <div class="form-success">{message}</div> },
                    Some(Err(message)) => html! { <div class="form-error">{message}</div> },
                    None => html! {},
                }
            }

            <button type="submit" class="btn-submit" disabled={*submitting}>
                { if *submitting { "Emitiendo..." } else { "Emitir Tickets" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> BackendUser {
        BackendUser {
            id: "u1".into(),
            name: "Ana".into(),
            email: "12-34567@usb.ve".into(),
            avatar: None,
            role: "user".into(),
            qr_code: None,
            becado: None,
            estudiante_id: None,
        }
    }

    #[test]
    fn requiere_usuario_seleccionado() {
        let errors = validate(&None, "1", "5.0");
        assert!(errors.user.is_some());
        assert!(errors.quantity.is_none());
        assert!(errors.price.is_none());
    }

    #[test]
    fn cantidad_minima_uno() {
        let some_user = Some(user());
        assert!(validate(&some_user, "0", "5.0").quantity.is_some());
        assert!(validate(&some_user, "abc", "5.0").quantity.is_some());
        assert!(validate(&some_user, "1", "5.0").is_empty());
    }

    #[test]
    fn precio_no_negativo() {
        let some_user = Some(user());
        assert!(validate(&some_user, "2", "-1").price.is_some());
        assert!(validate(&some_user, "2", "0").is_empty());
    }
}
