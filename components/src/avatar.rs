use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AvatarProps {
    pub src: AttrValue,
    /// shown when the image cannot be loaded
    pub initial: char,
    #[prop_or_default]
    pub alt: AttrValue,
    #[prop_or(AttrValue::Static("avatar"))]
    pub class: AttrValue,
}

#[function_component(Avatar)]
pub fn avatar(props: &AvatarProps) -> Html {
    let broken = use_state(|| false);
    {
        // a new source deserves a new attempt
        let broken = broken.clone();
        use_effect_with(props.src.clone(), move |_| broken.set(false));
    }

    if *broken {
        return html! {
            <div class={classes!(props.class.to_string(), "avatar-fallback")}>
                {props.initial}
            </div>
        };
    }
    let onerror = {
        let broken = broken.clone();
        Callback::from(move |_: Event| broken.set(true))
    };
    html! {
        <img class={props.class.clone()} src={props.src.clone()} alt={props.alt.clone()} {onerror} />
    }
}
