//! The reference catalog.
//!
//! The tree is built once, the first time it is requested, and lives for
//! the rest of the process.
use crate::core::menu::{MenuNode, MenuTree};
use crate::core::navigation;

use std::sync::LazyLock;

static TREE: LazyLock<MenuTree> = LazyLock::new(|| {
    MenuTree::new(vec![
        category("Bilgisayar", vec![
            category("Dizüstü", vec![
                category("Oyun Dizüstü", vec![
                    search("ASUS ROG", "asus rog"),
                    search("MSI Katana", "msi katana"),
                    search("Lenovo Legion", "lenovo legion"),
                ]),
                category("İş Dizüstü", vec![
                    search("ThinkPad", "thinkpad"),
                    search("ZenBook", "zenbook"),
                ]),
            ]),
            category("Masaüstü", vec![
                category("Hazır Sistemler", vec![
                    search("Oyun PC", "oyun pc"),
                    search("Ofis PC", "ofis pc"),
                ]),
                search("Mini PC", "mini pc"),
            ]),
            category("Monitör", Vec::new()),
        ]),
        category("Bileşenler", vec![
            category("İşlemci", vec![
                category("Intel", vec![
                    search("Core i5", "core i5"),
                    search("Core i7", "core i7"),
                    search("Core i9", "core i9"),
                ]),
                category("AMD", vec![
                    search("Ryzen 5", "ryzen 5"),
                    search("Ryzen 7", "ryzen 7"),
                ]),
            ]),
            category("Ekran Kartı", vec![
                category("NVIDIA", vec![
                    search("RTX 4060", "rtx 4060"),
                    search("RTX 4070", "rtx 4070"),
                ]),
                category("AMD Radeon", vec![
                    search("RX 7600", "rx 7600"),
                    search("RX 7800 XT", "rx 7800 xt"),
                ]),
            ]),
            category("Bellek", vec![
                search("DDR4", "ddr4"),
                search("DDR5", "ddr5"),
            ]),
            category("Depolama", vec![
                category("SSD", vec![
                    search("NVMe SSD", "nvme ssd"),
                    search("SATA SSD", "sata ssd"),
                ]),
                search("HDD", "hdd"),
            ]),
        ]),
        category("Çevre Birimleri", vec![
            category("Klavye", vec![
                search("Mekanik Klavye", "mekanik klavye"),
                search("Kablosuz Klavye", "kablosuz klavye"),
            ]),
            category("Fare", vec![
                search("Oyuncu Faresi", "oyuncu faresi"),
                search("Kablosuz Fare", "kablosuz fare"),
            ]),
            search("Kulaklık", "kulaklık"),
        ]),
        search("Kampanyalar", "kampanya"),
    ])
});

/// Returns the menu tree of the catalog.
///
/// ```
/// let tree = vitrine::catalog::tree();
///
/// assert_eq!(tree.depth(), 3);
/// assert!(tree.validate().is_ok());
/// ```
pub fn tree() -> &'static MenuTree {
    &TREE
}

fn category(label: &str, children: Vec<MenuNode>) -> MenuNode {
    MenuNode::branch(label, navigation::category_path(label), children)
}

fn search(label: &str, query: &str) -> MenuNode {
    let target =
        navigation::search_path(query).unwrap_or_else(|| String::from(navigation::SEARCH));

    MenuNode::leaf(label, target)
}
