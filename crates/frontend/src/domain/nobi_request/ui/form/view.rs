use super::view_model::NobiFormViewModel;
use crate::domain::nobi_request::wizard::TOTAL_PAGES;
use crate::shared::components::ui::{AmountInput, Button, Input, Select};
use crate::shared::config::FormConfig;
use crate::shared::theme::ThemeToggle;
use contracts::domain::nobi_request::{AmountField, CurrencyOption, TextField};
use leptos::prelude::*;

const STYLES: &str = r#"
.nobi-form-loading { text-align: center; padding: 2rem; }
.progress-container { margin: 1rem 0 2rem 0; background: #f8f9fa; border-radius: 8px; padding: 1rem; }
.progress-bar { width: 100%; height: 8px; background-color: #e9ecef; border-radius: 4px; overflow: hidden; margin-bottom: 0.5rem; }
.progress-fill { height: 100%; background: linear-gradient(90deg, #007bff, #0056b3); border-radius: 4px; transition: width 0.3s ease; }
.progress-text { font-size: 0.875rem; color: #6c757d; text-align: center; }
.page-navigation { display: flex; justify-content: space-between; align-items: center; margin-top: 2rem; }
.page-indicator { display: flex; gap: 0.5rem; align-items: center; }
.page-dot { width: 12px; height: 12px; border-radius: 50%; background-color: #dee2e6; transition: background-color 0.3s ease; }
.page-dot.active { background-color: #007bff; }
.section-title { font-size: 1.25rem; font-weight: 600; margin-bottom: 1.5rem; padding-bottom: 0.5rem; border-bottom: 2px solid #007bff; }
.form-page { transition: opacity 0.3s ease; }
.form-page.transitioning { opacity: 0.4; }
.form-feedback-item { color: #da1414; font-size: 0.875rem; margin-top: 0.25rem; }
.nobi-form-dark { background: #1c1c24; color: #e9ecef; }
.nobi-form-dark .progress-container { background: #2a2a35; }
.nobi-form-dark .form-control { background: #2a2a35; color: #e9ecef; border-color: #4a4a57; }
"#;

#[component]
pub fn NobiForm(config: FormConfig) -> impl IntoView {
    let vm = NobiFormViewModel::new(config);
    vm.load();

    let state = vm.state;
    let loaded = Memo::new(move |_| state.with(|s| s.is_loaded()));

    view! {
        <div class="nobi-form" class:nobi-form-dark=move || vm.dark_mode.get()>
            <style>{STYLES}</style>
            <Show
                when=move || loaded.get()
                fallback=|| view! { <div class="nobi-form-loading">"Loading form data..."</div> }
            >
                <FormSheet vm=vm />
            </Show>
        </div>
    }
}

#[component]
fn FormSheet(vm: NobiFormViewModel) -> impl IntoView {
    let state = vm.state;
    let page = Memo::new(move |_| state.with(|s| s.wizard().page()));
    let progress = Memo::new(move |_| state.with(|s| s.progress()));
    let message = Memo::new(move |_| state.with(|s| s.message().cloned()));
    let transitioning = Memo::new(move |_| state.with(|s| s.wizard().is_transitioning()));
    let submitting = Memo::new(move |_| state.with(|s| s.is_submitting()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <div class="sheet sheet-lg">
            <div class="sheet-header">
                <h2 class="sheet-title">"NOBI Request Form"</h2>
                <ThemeToggle dark_mode=vm.dark_mode />
            </div>

            <div class="sheet-section">
                <div class="progress-container">
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            style:width=move || format!("{}%", progress.get())
                        ></div>
                    </div>
                    <div class="progress-text">
                        {move || format!("Progress: {}% Complete", progress.get())}
                    </div>
                </div>

                {move || message.get().map(|m| {
                    let class = if m.is_error() {
                        "alert alert-danger alert-dismissible"
                    } else {
                        "alert alert-success alert-dismissible"
                    };
                    view! {
                        <div class=class>
                            {m.text}
                            <button type="button" class="close" on:click=move |_| vm.dismiss_message()>
                                "×"
                            </button>
                        </div>
                    }
                })}

                <form on:submit=on_submit>
                    <div class="form-page" class:transitioning=move || transitioning.get()>
                        {move || match page.get() {
                            1 => view! { <RequestorPage vm=vm /> }.into_any(),
                            _ => view! { <VendorPage vm=vm /> }.into_any(),
                        }}
                    </div>

                    <div class="page-navigation">
                        <div>
                            <Show when=move || { page.get() > 1 }>
                                <Button
                                    variant="secondary"
                                    disabled=Signal::derive(move || transitioning.get())
                                    on_click=Callback::new(move |_| vm.go_prev())
                                >
                                    "← Previous"
                                </Button>
                            </Show>
                        </div>

                        <div class="page-indicator">
                            {(1..=TOTAL_PAGES)
                                .map(move |n| view! { <div class="page-dot" class:active=move || page.get() == n></div> })
                                .collect_view()}
                        </div>

                        <div>
                            <Show
                                when=move || { page.get() < TOTAL_PAGES }
                                fallback=move || view! {
                                    <Button
                                        variant="success"
                                        button_type="submit"
                                        disabled=Signal::derive(move || submitting.get())
                                    >
                                        {move || if submitting.get() { "Submitting..." } else { "Submit NOBI Request" }}
                                    </Button>
                                }
                            >
                                <Button
                                    disabled=Signal::derive(move || transitioning.get())
                                    on_click=Callback::new(move |_| vm.go_next())
                                >
                                    "Next →"
                                </Button>
                            </Show>
                        </div>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn text_value(vm: NobiFormViewModel, field: TextField) -> Memo<String> {
    let state = vm.state;
    Memo::new(move |_| state.with(|s| s.record().text(field).to_string()))
}

/// Plain text field bound to the controller
fn text_input(vm: NobiFormViewModel, field: TextField, input_type: &'static str) -> impl IntoView {
    view! {
        <Input
            id=field.id()
            label=field.label()
            input_type=input_type
            value=text_value(vm, field)
            on_input=Callback::new(move |v: String| vm.set_field(field, v))
        />
    }
}

fn amount_input(vm: NobiFormViewModel, field: AmountField) -> impl IntoView {
    let state = vm.state;
    let value = Memo::new(move |_| state.with(|s| s.record().amount(field).to_string()));
    let hint = Memo::new(move |_| state.with(|s| s.amount_hint(field).map(|e| e.to_string())));

    view! {
        <AmountInput
            id=field.id()
            label=field.label()
            value=value
            hint=hint
            on_input=Callback::new(move |raw: String| vm.set_amount(field, raw))
        />
    }
}

/// Page 1: requestor and company
#[component]
fn RequestorPage(vm: NobiFormViewModel) -> impl IntoView {
    let state = vm.state;
    let companies = Memo::new(move |_| {
        state.with(|s| {
            s.companies()
                .iter()
                .map(|c| (c.key.clone(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let company_key = Memo::new(move |_| state.with(|s| s.record().company.key.clone()));
    let company_error = Memo::new(move |_| state.with(|s| s.company_error().map(str::to_string)));

    view! {
        <div class="section-title">"Requestor Details"</div>
        {text_input(vm, TextField::RequestorFirstName, "text")}
        {text_input(vm, TextField::RequestorSurname, "text")}
        <Select
            id="company"
            label="Company"
            placeholder="Select a company"
            value=company_key
            options=companies
            error=company_error
            on_change=Callback::new(move |key: String| vm.select_company(key))
            required=true
        />
        {text_input(vm, TextField::CompanyNumber, "text")}
        {text_input(vm, TextField::ContactNumber, "tel")}
        {text_input(vm, TextField::CostCentre, "text")}
        {text_input(vm, TextField::Date, "date")}
        {text_input(vm, TextField::GeneralLedgerToBeCharged, "text")}
        {text_input(vm, TextField::LineManagerFullname, "text")}
        {text_input(vm, TextField::RequestingDepartmentStore, "text")}
    }
}

/// Page 2: vendor, category and amounts
#[component]
fn VendorPage(vm: NobiFormViewModel) -> impl IntoView {
    let state = vm.state;
    let categories = Memo::new(move |_| {
        state.with(|s| {
            s.categories()
                .iter()
                .map(|c| (c.key.clone(), c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let category_key = Memo::new(move |_| state.with(|s| s.record().category.key.clone()));
    let category_error = Memo::new(move |_| state.with(|s| s.category_error().map(str::to_string)));
    let currencies: Vec<(String, String)> = CurrencyOption::all()
        .iter()
        .map(|c| (c.code.to_string(), c.label()))
        .collect();
    let address = TextField::VendorAddressDetails;

    view! {
        <div class="section-title">"Vendor & Invoice Details"</div>
        {text_input(vm, TextField::SapVendorName, "text")}
        {text_input(vm, TextField::SapVendorNumber, "text")}
        {text_input(vm, TextField::VendorName, "text")}
        <Input
            id=address.id()
            label=address.label()
            value=text_value(vm, address)
            on_input=Callback::new(move |v: String| vm.set_field(address, v))
            multiline=true
        />
        <Select
            id="nOBICategory"
            label="NOBI Category"
            placeholder="Select a category"
            value=category_key
            options=categories
            error=category_error
            on_change=Callback::new(move |key: String| vm.select_category(key))
            required=true
        />
        {text_input(vm, TextField::MultipleBankAccountNumberToBeUsed, "text")}
        <Select
            id=TextField::Currency.id()
            label=TextField::Currency.label()
            placeholder="Select a currency"
            value=text_value(vm, TextField::Currency)
            options=Signal::stored(currencies)
            error=Signal::stored(None::<String>)
            on_change=Callback::new(move |code: String| vm.set_field(TextField::Currency, code))
        />
        {amount_input(vm, AmountField::InvoiceNetAmount)}
        {amount_input(vm, AmountField::InvoiceVatAmount)}
        {amount_input(vm, AmountField::TotalPrice)}
    }
}
