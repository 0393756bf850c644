use yew::prelude::*;

#[function_component(SunIcon)]
pub fn sun_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1rem" height="1rem" viewBox="0 0 24 24">
        <path fill="currentColor" d="M11 5V1h2v4zm6.65 2.75l-1.375-1.375l2.8-2.875l1.4 1.425zM19 13v-2h4v2zm-8 10v-4h2v4zM6.35 7.7L3.5 4.925l1.425-1.4L7.75 6.35zm12.7 12.8l-2.775-2.875l1.35-1.350l2.85 2.75zM1 13v-2h4v2zm3.925 7.5l-1.4-1.425l2.8-2.8l.725.675l.725.7zM12 18q-2.5 0-4.25-1.75T6 12t1.75-4.25T12 6t4.25 1.75T18 12t-1.75 4.25T12 18"/>
    </svg>
    }
}

#[function_component(MoonIcon)]
pub fn moon_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1rem" height="1rem" viewBox="0 0 24 24">
        <path fill="currentColor" d="M12 21q-3.75 0-6.375-2.625T3 12t2.625-6.375T12 3q.35 0 .688.025t.662.075q-1.025.725-1.638 1.888T11.1 7.5q0 2.25 1.575 3.825T16.5 12.9q1.375 0 2.525-.613T20.9 10.65q.05.325.075.663T21 12q0 3.75-2.625 6.375T12 21"/>
    </svg>
    }
}

#[function_component(CloseIcon)]
pub fn close_icon() -> Html {
    html! {
        <svg width="12" height="12" viewBox="0 0 48 48" fill="none" xmlns="http://www.w3.org/2000/svg">
        <path d="M8 8L40 40" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
        <path d="M8 40L40 8" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
        </svg>
    }
}

#[function_component(SearchIcon)]
pub fn search_icon() -> Html {
    html! {
    <svg class="icon" width="20" height="20" viewBox="0 0 48 48" fill="none">
        <circle cx="21" cy="21" r="15" stroke="currentColor" stroke-width="3"/>
        <path d="M32 32L42 42" stroke="currentColor" stroke-width="3" stroke-linecap="round"/>
    </svg>
    }
}

/// brand mark: two paddles and a ball
#[function_component(PaddleIcon)]
pub fn paddle_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1.5rem" height="1.5rem" viewBox="0 0 48 48">
        <rect x="4" y="12" width="4" height="24" rx="2" fill="currentColor"/>
        <rect x="40" y="12" width="4" height="24" rx="2" fill="currentColor"/>
        <circle cx="24" cy="24" r="4" fill="currentColor"/>
    </svg>
    }
}

#[function_component(LogoutIcon)]
pub fn logout_icon() -> Html {
    html! {
    <svg xmlns="http://www.w3.org/2000/svg" width="1rem" height="1rem" viewBox="0 0 24 24" fill="none">
        <path d="M14 4h4a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2h-4" stroke="currentColor" stroke-width="2" stroke-linecap="round"/>
        <path d="M10 16l-4-4l4-4M6 12h10" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"/>
    </svg>
    }
}
