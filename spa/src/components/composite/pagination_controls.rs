use yew::prelude::*;

#[derive(Debug, Clone, PartialEq, Properties)]
pub struct Props {
    pub page: u32,
    pub pages: u64,
    pub total: u64,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(PaginationControls)]
pub fn pagination_controls(props: &Props) -> Html {
    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_previous.emit(());
        })
    };

    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_next.emit(());
        })
    };

    let has_previous = props.page > 1;
    let has_next = u64::from(props.page) < props.pages;

    html! {
        <nav aria-label="pagination">
            <div class="d-flex justify-content-between align-items-center">
                <div class="text-muted">
                    { format!("Page {} of {} ({} items)", props.page, props.pages.max(1), props.total) }
                </div>
                <ul class="pagination mb-0">
                    <li class={if has_previous { "page-item" } else { "page-item disabled" }}>
                        <a class="page-link" href="#" onclick={on_previous} aria-label="Previous">
                            <span aria-hidden="true">{"«"}</span>
                        </a>
                    </li>
                    <li class="page-item active">
                        <span class="page-link">{ props.page }</span>
                    </li>
                    <li class={if has_next { "page-item" } else { "page-item disabled" }}>
                        <a class="page-link" href="#" onclick={on_next} aria-label="Next">
                            <span aria-hidden="true">{"»"}</span>
                        </a>
                    </li>
                </ul>
            </div>
        </nav>
    }
}
