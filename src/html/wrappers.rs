use maud::DOCTYPE;

use super::*;

pub(super) fn universal(body: Markup, resource: &'static str, title: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en-us" {
            head {
                title { (title) }
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                link type="text/css" rel="stylesheet" href={"/style/" (resource) ".css"};
            }
            body {
                (body)
                script type="module" src={"/script/" (resource) ".js"} {};
            }
        }
    }
}
