use dioxus::prelude::*;

use crate::ui::presentation::state::use_shell_state;

const SECTIONS: [(&str, &str); 5] = [
    (
        "Topladığımız bilgiler",
        "Yalnızca çocuğun seçtiği kullanıcı adı, avatar, öğrenci numarası, etkinlik puanları, \
         günlük planlar, notlar ve sınav sonuçları saklanır. Ad-soyad, e-posta, konum veya \
         fotoğraf istenmez.",
    ),
    (
        "Bilgilerin saklanması",
        "Veriler cihazın yerel depolamasında ve öğrenci numarasıyla eşleşen sunucu kaydında \
         tutulur. Öğrenci numarası şifre yerine geçer; yalnızca güvendiğiniz kişilerle paylaşın.",
    ),
    (
        "Kullanım amacı",
        "Bilgiler yalnızca ilerlemeyi göstermek, başka cihazdan devam etmeyi sağlamak ve \
         veli/öğretmen raporunu oluşturmak için kullanılır. Reklam veya profil çıkarma yapılmaz.",
    ),
    (
        "Üçüncü taraflar",
        "Veriler üçüncü taraflarla paylaşılmaz ve satılmaz.",
    ),
    (
        "Silme talebi",
        "Veli veya öğretmen, öğrenci numarasını bildirerek kayıtların silinmesini isteyebilir. \
         Cihazdaki veriler tarayıcı verileri temizlenerek silinebilir.",
    ),
];

#[component]
pub fn PrivacyView() -> Element {
    let mut state = use_shell_state();

    rsx! {
        section {
            class: "screen privacy",
            h1 { class: "title", "Gizlilik Politikası" }
            for (heading, text) in SECTIONS {
                article {
                    key: "{heading}",
                    class: "card",
                    h2 { "{heading}" }
                    p { "{text}" }
                }
            }
            button {
                class: "btn btn-primary",
                onclick: move |_| state.navigate(|s| s.close_privacy()),
                "← Geri"
            }
        }
    }
}
