//! Categories screen: category rows that unfold into their subcategories,
//! with create/edit/delete for both levels.

use leptos::prelude::*;

use crate::components::banner::{ErrorBanner, SuccessBanner};
use crate::components::layout::AdminLayout;
use crate::net::http::Http;
use crate::net::types::{Category, CategoryForm, SubCategory, SubCategoryForm};
use crate::state::categories::CategoriesState;

/// Which dialog is open, if any.
#[derive(Clone, Debug, PartialEq)]
enum Dialog {
    CreateCategory,
    EditCategory(Category),
    CreateSubCategory { parent: i64 },
    EditSubCategory(SubCategory),
}

#[component]
pub fn CategoriesPage() -> impl IntoView {
    let http = expect_context::<Http>();

    let state = RwSignal::new(CategoriesState::default());
    let dialog = RwSignal::new(None::<Dialog>);
    let category_form = RwSignal::new(CategoryForm::default());
    let subcategory_form = RwSignal::new(SubCategoryForm::default());

    {
        let http = http.clone();
        Effect::new(move || {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    state.update(|s| s.begin_load());
                    let categories = crate::net::api::fetch_categories(&http).await;
                    let subcategories = crate::net::api::fetch_subcategories(&http).await;
                    match (categories, subcategories) {
                        (Ok(cats), Ok(subs)) => state.update(|s| s.loaded(cats, subs)),
                        _ => state.update(|s| s.load_failed()),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = &http;
        });
    }

    let save_dialog = {
        let http = http.clone();
        Callback::new(move |()| {
            let Some(which) = dialog.get_untracked() else {
                return;
            };
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    let outcome = match which {
                        Dialog::CreateCategory => {
                            let form = category_form.get_untracked();
                            crate::net::api::create_category(&http, &form).await.map(|c| {
                                state.update(|s| s.upsert_category(c));
                                "Catégorie créée avec succès"
                            })
                        }
                        Dialog::EditCategory(category) => {
                            let form = category_form.get_untracked();
                            crate::net::api::update_category(&http, category.id, &form)
                                .await
                                .map(|c| {
                                    state.update(|s| s.upsert_category(c));
                                    "Catégorie mise à jour avec succès"
                                })
                        }
                        Dialog::CreateSubCategory { parent } => {
                            let mut form = subcategory_form.get_untracked();
                            form.category = parent;
                            crate::net::api::create_subcategory(&http, &form).await.map(|sub| {
                                state.update(|s| s.upsert_subcategory(sub));
                                "Sous-catégorie créée avec succès"
                            })
                        }
                        Dialog::EditSubCategory(sub) => {
                            let mut form = subcategory_form.get_untracked();
                            form.category = sub.category;
                            crate::net::api::update_subcategory(&http, sub.id, &form)
                                .await
                                .map(|sub| {
                                    state.update(|s| s.upsert_subcategory(sub));
                                    "Sous-catégorie mise à jour avec succès"
                                })
                        }
                    };
                    match outcome {
                        Ok(message) => {
                            state.update(|s| s.succeeded(message));
                            dialog.set(None);
                        }
                        Err(_) => state.update(|s| {
                            s.action_failed("Impossible d'enregistrer. Veuillez réessayer.");
                        }),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, which);
        })
    };

    let delete_category = {
        let http = http.clone();
        Callback::new(move |id: i64| {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_category(&http, id).await {
                        Ok(()) => state.update(|s| {
                            s.remove_category(id);
                            s.succeeded("Catégorie supprimée");
                        }),
                        Err(_) => state.update(|s| {
                            s.action_failed("Impossible de supprimer la catégorie.");
                        }),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, id);
        })
    };

    let delete_subcategory = {
        let http = http.clone();
        Callback::new(move |id: i64| {
            #[cfg(feature = "hydrate")]
            {
                let http = http.clone();
                leptos::task::spawn_local(async move {
                    match crate::net::api::delete_subcategory(&http, id).await {
                        Ok(()) => state.update(|s| {
                            s.remove_subcategory(id);
                            s.succeeded("Sous-catégorie supprimée");
                        }),
                        Err(_) => state.update(|s| {
                            s.action_failed("Impossible de supprimer la sous-catégorie.");
                        }),
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&http, id);
        })
    };

    view! {
        <AdminLayout>
            <div class="categories-page">
                <header class="page-header">
                    <h1>"Catégories"</h1>
                    <button
                        class="btn btn--primary"
                        on:click=move |_| {
                            category_form.set(CategoryForm::default());
                            dialog.set(Some(Dialog::CreateCategory));
                        }
                    >
                        "+ Nouvelle catégorie"
                    </button>
                </header>

                <ErrorBanner message=Signal::derive(move || state.with(|s| s.error.clone()))/>
                <SuccessBanner message=Signal::derive(move || state.with(|s| s.success.clone()))/>

                <Show
                    when=move || !state.with(|s| s.loading)
                    fallback=|| view! { <p class="page-loading">"Chargement..."</p> }
                >
                    <div class="categories-page__list">
                        {move || {
                            state
                                .with(|s| s.categories.clone())
                                .into_iter()
                                .map(|category| {
                                    let id = category.id;
                                    let edit_target = category.clone();
                                    view! {
                                        <div class="category-row">
                                            <div class="category-row__head">
                                                <button
                                                    class="category-row__toggle"
                                                    on:click=move |_| state.update(|s| s.toggle_expanded(id))
                                                >
                                                    {move || {
                                                        if state.with(|s| s.expanded == Some(id)) { "▾" } else { "▸" }
                                                    }}
                                                </button>
                                                <span class="category-row__name">{category.name.clone()}</span>
                                                <span class="category-row__description">
                                                    {category.description.clone()}
                                                </span>
                                                <div class="category-row__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            category_form.set(CategoryForm {
                                                                name: edit_target.name.clone(),
                                                                description: edit_target.description.clone(),
                                                                icon: edit_target.icon.clone(),
                                                                image_url: edit_target.image_url.clone(),
                                                            });
                                                            dialog.set(Some(Dialog::EditCategory(edit_target.clone())));
                                                        }
                                                    >
                                                        "Modifier"
                                                    </button>
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            subcategory_form.set(SubCategoryForm::default());
                                                            dialog.set(Some(Dialog::CreateSubCategory { parent: id }));
                                                        }
                                                    >
                                                        "+ Sous-catégorie"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| delete_category.run(id)
                                                    >
                                                        "Supprimer"
                                                    </button>
                                                </div>
                                            </div>
                                            <Show when=move || state.with(|s| s.expanded == Some(id))>
                                                <ul class="category-row__subs">
                                                    {move || {
                                                        state
                                                            .with(|s| s.subcategories_of(id))
                                                            .into_iter()
                                                            .map(|sub| {
                                                                let sub_id = sub.id;
                                                                let edit_sub = sub.clone();
                                                                view! {
                                                                    <li class="subcategory-row">
                                                                        <span>{sub.name.clone()}</span>
                                                                        <div class="subcategory-row__actions">
                                                                            <button
                                                                                class="btn btn--small"
                                                                                on:click=move |_| {
                                                                                    subcategory_form.set(SubCategoryForm {
                                                                                        category: edit_sub.category,
                                                                                        name: edit_sub.name.clone(),
                                                                                        description: edit_sub.description.clone(),
                                                                                        icon: edit_sub.icon.clone(),
                                                                                    });
                                                                                    dialog.set(Some(Dialog::EditSubCategory(edit_sub.clone())));
                                                                                }
                                                                            >
                                                                                "Modifier"
                                                                            </button>
                                                                            <button
                                                                                class="btn btn--small btn--danger"
                                                                                on:click=move |_| delete_subcategory.run(sub_id)
                                                                            >
                                                                                "Supprimer"
                                                                            </button>
                                                                        </div>
                                                                    </li>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()
                                                    }}
                                                </ul>
                                            </Show>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>

                <Show when=move || dialog.get().is_some()>
                    {move || match dialog.get() {
                        Some(Dialog::CreateCategory | Dialog::EditCategory(_)) => view! {
                            <CategoryDialog
                                form=category_form
                                on_cancel=Callback::new(move |()| dialog.set(None))
                                on_save=save_dialog
                            />
                        }
                        .into_any(),
                        Some(Dialog::CreateSubCategory { .. } | Dialog::EditSubCategory(_)) => view! {
                            <SubCategoryDialog
                                form=subcategory_form
                                on_cancel=Callback::new(move |()| dialog.set(None))
                                on_save=save_dialog
                            />
                        }
                        .into_any(),
                        None => ().into_any(),
                    }}
                </Show>
            </div>
        </AdminLayout>
    }
}

#[component]
fn CategoryDialog(
    form: RwSignal<CategoryForm>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Catégorie"</h2>
                <label class="dialog__label">
                    "Nom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Icône"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.icon.clone())
                        on:input=move |ev| form.update(|f| f.icon = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Image (URL)"
                    <input
                        class="dialog__input"
                        type="url"
                        prop:value=move || form.with(|f| f.image_url.clone())
                        on:input=move |ev| form.update(|f| f.image_url = event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Enregistrer"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn SubCategoryDialog(
    form: RwSignal<SubCategoryForm>,
    on_cancel: Callback<()>,
    on_save: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Sous-catégorie"</h2>
                <label class="dialog__label">
                    "Nom"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Description"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.description.clone())
                        on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Icône"
                    <input
                        class="dialog__input"
                        type="text"
                        prop:value=move || form.with(|f| f.icon.clone())
                        on:input=move |ev| form.update(|f| f.icon = event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Annuler"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| on_save.run(())>
                        "Enregistrer"
                    </button>
                </div>
            </div>
        </div>
    }
}
