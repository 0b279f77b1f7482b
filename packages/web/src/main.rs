use dioxus::prelude::*;

use ui::views::HomeView;
use ui::NoticeProvider;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        NoticeProvider {
            HomeView {}
        }
    }
}
