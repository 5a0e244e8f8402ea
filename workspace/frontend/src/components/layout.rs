use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
    pub title: String,
}

#[function_component(Layout)]
pub fn layout(props: &Props) -> Html {
    html! {
        <div class="flex flex-col min-h-screen bg-base-200">
            <Navbar title={props.title.clone()} />
            <main class="flex-1 p-6 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct NavbarProps {
    title: String,
}

#[function_component(Navbar)]
fn navbar(props: &NavbarProps) -> Html {
    html! {
        <div class="navbar bg-base-100 shadow">
            <div class="navbar-start">
                <Link<Route> to={Route::Home} classes="btn btn-ghost text-xl">
                    <i class="fas fa-leaf text-success"></i>
                    {" LeafScan"}
                </Link<Route>>
            </div>
            <div class="navbar-center">
                <span class="text-lg font-semibold">{&props.title}</span>
            </div>
            <div class="navbar-end gap-2">
                <Link<Route> to={Route::Home} classes="btn btn-ghost btn-sm">{"Scan"}</Link<Route>>
                <Link<Route> to={Route::History} classes="btn btn-ghost btn-sm">{"History"}</Link<Route>>
                <Link<Route> to={Route::About} classes="btn btn-ghost btn-sm">{"About"}</Link<Route>>
            </div>
        </div>
    }
}
