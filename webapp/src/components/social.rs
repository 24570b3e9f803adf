use dioxus::prelude::*;

use site::content::Social;

#[derive(Clone, PartialEq, Props)]
pub struct SocialLinksProps {
    social: Social,
}

// one link per configured platform; platforms with an empty url are left out
#[component]
pub fn SocialLinks(props: SocialLinksProps) -> Element {
    rsx! {
        div { class: "social-links",
            for (platform, url) in props.social.links() {
                a {
                    key: "{platform}",
                    class: "social-link",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "{platform}"
                }
            }
        }
    }
}
