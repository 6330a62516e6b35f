// ============================================================================
// SESSION CONTEXT - Compartir estado de sesión entre componentes
// ============================================================================

use yew::prelude::*;

use crate::hooks::use_session::{use_session, UseSessionHandle};

#[derive(Properties, PartialEq)]
pub struct SessionContextProviderProps {
    pub children: Children,
}

/// Provider que envuelve la app y expone la sesión via Context API.
#[function_component(SessionContextProvider)]
pub fn session_context_provider(props: &SessionContextProviderProps) -> Html {
    let session_handle = use_session();

    html! {
        <ContextProvider<UseSessionHandle> context={session_handle}>
            {props.children.clone()}
        </ContextProvider<UseSessionHandle>>
    }
}
