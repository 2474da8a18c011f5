//! Company address block shared by the About and Contact pages

use showcase_core::copy::{COMPANY, InfoIcons};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactDetailsProps {
    pub icons: InfoIcons,
}

#[function_component(ContactDetails)]
pub fn contact_details(props: &ContactDetailsProps) -> Html {
    let icons = props.icons;
    let [street, country] = COMPANY.address_lines;

    html! {
        <div class="space-y-4">
            <DetailRow icon={icons.address} label="Address">
                { street }<br />{ country }
            </DetailRow>
            <DetailRow icon={icons.phone} label="Phone">{ COMPANY.phone }</DetailRow>
            <DetailRow icon={icons.email} label="Email">{ COMPANY.email }</DetailRow>
            <DetailRow icon={icons.website} label="Website">{ COMPANY.website }</DetailRow>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct DetailRowProps {
    icon: &'static str,
    label: &'static str,
    children: Html,
}

#[function_component(DetailRow)]
fn detail_row(props: &DetailRowProps) -> Html {
    html! {
        <div class="flex items-start space-x-3">
            <span class="text-primary mt-1 text-lg">{ props.icon }</span>
            <div>
                <strong class="text-app text-sm">{ props.label }</strong>
                <p class="text-secondary text-sm">{ props.children.clone() }</p>
            </div>
        </div>
    }
}
