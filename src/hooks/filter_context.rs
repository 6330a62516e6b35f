// ============================================================================
// FILTER CONTEXT - Estado de filtros compartido entre tabla y estadísticas
// ============================================================================
// Equivalente tab-scoped de un store global: los inputs de búsqueda, la
// tabla y las cards de stats leen el mismo FilterStore y escriben via
// acciones por campo (`FilterAction`).
// ============================================================================

use yew::prelude::*;

use crate::stores::FilterStore;

pub type FilterHandle = UseReducerHandle<FilterStore>;

#[derive(Properties, PartialEq)]
pub struct FilterContextProviderProps {
    pub children: Children,
}

#[function_component(FilterContextProvider)]
pub fn filter_context_provider(props: &FilterContextProviderProps) -> Html {
    let filters = use_reducer_eq(FilterStore::default);

    html! {
        <ContextProvider<FilterHandle> context={filters}>
            {props.children.clone()}
        </ContextProvider<FilterHandle>>
    }
}

#[hook]
pub fn use_filters() -> FilterHandle {
    use_context::<FilterHandle>().expect("use_filters requiere un FilterContextProvider")
}
