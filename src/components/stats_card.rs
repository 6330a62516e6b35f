use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatsCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    pub icon: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(StatsCard)]
pub fn stats_card(props: &StatsCardProps) -> Html {
    html! {
        <div class={classes!("stats-card", props.class.clone())}>
            <div class="stats-card-icon">{&props.icon}</div>
            <h3 class="stats-card-title">{&props.title}</h3>
            <div class="stats-card-value">{&props.value}</div>
            if let Some(description) = &props.description {
                <p class="stats-card-description">{description}</p>
            }
        </div>
    }
}
