use yew::prelude::*;

use crate::models::BackendUser;
use crate::services::ApiClient;

pub struct UseUsersHandle {
    /// Solo usuarios con rol "user" (los admin no reciben tickets).
    pub users: UseStateHandle<Vec<BackendUser>>,
    pub loading: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
}

#[hook]
pub fn use_users() -> UseUsersHandle {
    let users = use_state(Vec::<BackendUser>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);

    {
        let users = users.clone();
        let loading = loading.clone();
        let error = error.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match ApiClient::new().get_users().await {
                    Ok(all_users) => {
                        let regular: Vec<BackendUser> = all_users
                            .into_iter()
                            .filter(|u| u.role == "user")
                            .collect();
                        log::info!("👥 Usuarios cargados: {}", regular.len());
                        users.set(regular);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando usuarios: {}", e);
                        error.set(Some(e));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    UseUsersHandle {
        users,
        loading,
        error,
    }
}
