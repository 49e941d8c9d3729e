use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::config::TOAST_DURATION_MS;
use crate::notice::{Notice, Severity};

const MAX_VISIBLE: usize = 3;

/// Handle for pushing toasts, shared through context.
#[derive(Clone, PartialEq)]
pub struct Toaster {
    push: Callback<Notice>,
}

impl Toaster {
    pub fn show(&self, notice: Notice) {
        self.push.emit(notice);
    }
}

/// The toaster from the nearest `ToastProvider`, or one that only logs.
#[hook]
pub fn use_toaster() -> Toaster {
    use_context::<Toaster>().unwrap_or_else(|| Toaster {
        push: Callback::from(|notice: Notice| {
            info!("Toast without provider: {} - {}", notice.title, notice.body);
        }),
    })
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ToastList {
    next_id: u32,
    items: Vec<(u32, Notice)>,
}

pub enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl ToastList {
    pub fn items(&self) -> &[(u32, Notice)] {
        &self.items
    }
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(notice) => {
                next.items.push((next.next_id, notice));
                next.next_id = next.next_id.wrapping_add(1);
                if next.items.len() > MAX_VISIBLE {
                    let overflow = next.items.len() - MAX_VISIBLE;
                    next.items.drain(..overflow);
                }
            }
            ToastAction::Dismiss(id) => next.items.retain(|(item_id, _)| *item_id != id),
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_reducer(ToastList::default);

    let toaster = {
        let toasts = toasts.clone();
        Toaster {
            push: Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice))),
        }
    };

    let on_dismiss = {
        let toasts = toasts.clone();
        Callback::from(move |id: u32| toasts.dispatch(ToastAction::Dismiss(id)))
    };

    html! {
        <ContextProvider<Toaster> context={toaster}>
            { for props.children.iter() }
            <div class="toast-viewport">
                { for toasts.items().iter().map(|(id, notice)| html! {
                    <Toast key={*id} id={*id} notice={notice.clone()} on_dismiss={on_dismiss.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .toast-viewport {
                    position: fixed;
                    bottom: 1.5rem;
                    right: 1.5rem;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                    z-index: 100;
                    max-width: 380px;
                }
                .toast {
                    background: #ffffff;
                    color: #1f1f3a;
                    border: 1px solid rgba(124, 58, 237, 0.2);
                    border-radius: 12px;
                    padding: 1rem 1.25rem;
                    box-shadow: 0 12px 32px rgba(0, 0, 0, 0.2);
                    cursor: pointer;
                    animation: toastIn 0.3s ease-out;
                }
                .toast.destructive {
                    background: #dc2626;
                    color: #ffffff;
                    border-color: #b91c1c;
                }
                .toast-title {
                    font-weight: 700;
                    margin-bottom: 0.25rem;
                }
                .toast-body {
                    font-size: 0.9rem;
                    opacity: 0.9;
                }
                @keyframes toastIn {
                    from { transform: translateY(20px); opacity: 0; }
                    to { transform: translateY(0); opacity: 1; }
                }
                "#}
            </style>
        </ContextProvider<Toaster>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    id: u32,
    notice: Notice,
    on_dismiss: Callback<u32>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |id| {
                let id = *id;
                let timeout = Timeout::new(TOAST_DURATION_MS, move || on_dismiss.emit(id));
                move || drop(timeout)
            },
            props.id,
        );
    }

    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        let id = props.id;
        Callback::from(move |_: MouseEvent| on_dismiss.emit(id))
    };

    let class = match props.notice.severity {
        Severity::Normal => "toast",
        Severity::Destructive => "toast destructive",
    };

    html! {
        <div {class} role="status" {onclick}>
            <div class="toast-title">{&props.notice.title}</div>
            <div class="toast-body">{&props.notice.body}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(list: Rc<ToastList>, title: &str) -> Rc<ToastList> {
        list.reduce(ToastAction::Push(Notice::normal(title, "")))
    }

    #[test]
    fn oldest_toasts_fall_off() {
        let mut list = Rc::new(ToastList::default());
        for title in ["a", "b", "c", "d"] {
            list = push(list, title);
        }
        let titles: Vec<_> = list.items().iter().map(|(_, n)| n.title.as_str()).collect();
        assert_eq!(titles, ["b", "c", "d"]);
    }

    #[test]
    fn dismiss_removes_only_that_toast() {
        let list = push(push(Rc::new(ToastList::default()), "a"), "b");
        let first = list.items()[0].0;
        let list = list.reduce(ToastAction::Dismiss(first));
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].1.title, "b");
    }
}
