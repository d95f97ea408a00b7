use shared::ObjectType;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};
use yew::prelude::*;

use crate::storage::{KvStore, LANGUAGE_KEY};

/// The fourteen interface languages. The strum string is the BCP 47 code
/// persisted under the `language` storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, IntoStaticStr, EnumIter)]
pub enum Locale {
    #[default]
    #[strum(serialize = "en")]
    En,
    #[strum(serialize = "zh-CN")]
    ZhCn,
    #[strum(serialize = "zh-TW")]
    ZhTw,
    #[strum(serialize = "de")]
    De,
    #[strum(serialize = "fr")]
    Fr,
    #[strum(serialize = "es")]
    Es,
    #[strum(serialize = "pt")]
    Pt,
    #[strum(serialize = "ru")]
    Ru,
    #[strum(serialize = "tr")]
    Tr,
    #[strum(serialize = "th")]
    Th,
    #[strum(serialize = "id")]
    Id,
    #[strum(serialize = "hi")]
    Hi,
    #[strum(serialize = "ar")]
    Ar,
    #[strum(serialize = "ms")]
    Ms,
}

impl Locale {
    pub fn code(&self) -> &'static str {
        (*self).into()
    }

    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::ZhCn => "简体中文",
            Locale::ZhTw => "繁體中文",
            Locale::De => "Deutsch",
            Locale::Fr => "Français",
            Locale::Es => "Español",
            Locale::Pt => "Português",
            Locale::Ru => "Русский",
            Locale::Tr => "Türkçe",
            Locale::Th => "ไทย",
            Locale::Id => "Bahasa Indonesia",
            Locale::Hi => "हिन्दी",
            Locale::Ar => "العربية",
            Locale::Ms => "Bahasa Melayu",
        }
    }

    /// Next hop in the fallback chain; English is terminal.
    fn fallback(&self) -> Option<Locale> {
        match self {
            Locale::En => None,
            _ => Some(Locale::En),
        }
    }
}

pub fn stored_locale(store: &impl KvStore) -> Locale {
    store
        .read(LANGUAGE_KEY)
        .and_then(|code| code.parse().ok())
        .unwrap_or_default()
}

pub fn persist_locale(store: &impl KvStore, locale: Locale) {
    store.write(LANGUAGE_KEY, locale.code());
}

pub type LocaleHandle = UseStateHandle<Locale>;

#[hook]
pub fn use_locale() -> LocaleHandle {
    use_context::<LocaleHandle>().expect("locale context not provided")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    AppTitle,
    SignIn,
    SignOut,
    Username,
    Password,
    Dashboard,
    Users,
    Language,
    Health,
    Database,
    ObjectCounts,
    Refresh,
    ExportCsv,
    ExportJson,
    Actions,
    Delete,
    Edit,
    Save,
    Cancel,
    NewUser,
    Name,
    DisplayName,
    Email,
    Administrator,
    ObjectId,
    ObjectName,
    Description,
    PresentValue,
    EventState,
    StatusFlags,
    OutOfService,
    FilterByName,
    Loading,
    NoData,
    NotFoundTitle,
    BackToDashboard,
    AnalogInputs,
    AnalogOutputs,
    AnalogValues,
    BinaryInputs,
    BinaryOutputs,
    BinaryValues,
    MultiStateInputs,
    MultiStateOutputs,
    MultiStateValues,
}

impl Text {
    pub fn for_object_type(object_type: ObjectType) -> Text {
        match object_type {
            ObjectType::AnalogInput => Text::AnalogInputs,
            ObjectType::AnalogOutput => Text::AnalogOutputs,
            ObjectType::AnalogValue => Text::AnalogValues,
            ObjectType::BinaryInput => Text::BinaryInputs,
            ObjectType::BinaryOutput => Text::BinaryOutputs,
            ObjectType::BinaryValue => Text::BinaryValues,
            ObjectType::MultiStateInput => Text::MultiStateInputs,
            ObjectType::MultiStateOutput => Text::MultiStateOutputs,
            ObjectType::MultiStateValue => Text::MultiStateValues,
        }
    }
}

/// Resolve a key in the given locale, walking the fallback chain for
/// anything a catalog does not cover. The English catalog is total, so
/// this never fails to produce a string.
pub fn translate(locale: Locale, text: Text) -> &'static str {
    match lookup(locale, text) {
        Some(message) => message,
        None => match locale.fallback() {
            Some(fallback) => translate(fallback, text),
            None => english(text),
        },
    }
}

fn lookup(locale: Locale, text: Text) -> Option<&'static str> {
    match locale {
        Locale::En => Some(english(text)),
        Locale::ZhCn => zh_cn(text),
        Locale::ZhTw => zh_tw(text),
        Locale::De => de(text),
        Locale::Fr => fr(text),
        Locale::Es => es(text),
        Locale::Pt => pt(text),
        Locale::Ru => ru(text),
        Locale::Tr => tr(text),
        Locale::Th => th(text),
        Locale::Id => id(text),
        Locale::Hi => hi(text),
        Locale::Ar => ar(text),
        Locale::Ms => ms(text),
    }
}

fn english(text: Text) -> &'static str {
    match text {
        Text::AppTitle => "XBACnet Console",
        Text::SignIn => "Sign in",
        Text::SignOut => "Sign out",
        Text::Username => "Username",
        Text::Password => "Password",
        Text::Dashboard => "Dashboard",
        Text::Users => "Users",
        Text::Language => "Language",
        Text::Health => "Health",
        Text::Database => "Database",
        Text::ObjectCounts => "Object counts",
        Text::Refresh => "Refresh",
        Text::ExportCsv => "Export CSV",
        Text::ExportJson => "Export JSON",
        Text::Actions => "Actions",
        Text::Delete => "Delete",
        Text::Edit => "Edit",
        Text::Save => "Save",
        Text::Cancel => "Cancel",
        Text::NewUser => "New user",
        Text::Name => "Name",
        Text::DisplayName => "Display name",
        Text::Email => "Email",
        Text::Administrator => "Administrator",
        Text::ObjectId => "Object ID",
        Text::ObjectName => "Object name",
        Text::Description => "Description",
        Text::PresentValue => "Present value",
        Text::EventState => "Event state",
        Text::StatusFlags => "Status flags",
        Text::OutOfService => "Out of service",
        Text::FilterByName => "Filter by name",
        Text::Loading => "Loading…",
        Text::NoData => "No data",
        Text::NotFoundTitle => "Page not found",
        Text::BackToDashboard => "Back to dashboard",
        Text::AnalogInputs => "Analog Inputs",
        Text::AnalogOutputs => "Analog Outputs",
        Text::AnalogValues => "Analog Values",
        Text::BinaryInputs => "Binary Inputs",
        Text::BinaryOutputs => "Binary Outputs",
        Text::BinaryValues => "Binary Values",
        Text::MultiStateInputs => "Multi-state Inputs",
        Text::MultiStateOutputs => "Multi-state Outputs",
        Text::MultiStateValues => "Multi-state Values",
    }
}

fn zh_cn(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::AppTitle => "XBACnet 管理平台",
        Text::SignIn => "登录",
        Text::SignOut => "退出登录",
        Text::Username => "用户名",
        Text::Password => "密码",
        Text::Dashboard => "仪表盘",
        Text::Users => "用户管理",
        Text::Language => "语言",
        Text::Health => "健康状态",
        Text::Database => "数据库",
        Text::ObjectCounts => "对象统计",
        Text::Refresh => "刷新",
        Text::ExportCsv => "导出 CSV",
        Text::ExportJson => "导出 JSON",
        Text::Actions => "操作",
        Text::Delete => "删除",
        Text::Edit => "编辑",
        Text::Save => "保存",
        Text::Cancel => "取消",
        Text::NewUser => "新建用户",
        Text::Name => "名称",
        Text::DisplayName => "显示名称",
        Text::Email => "邮箱",
        Text::Administrator => "管理员",
        Text::ObjectId => "对象标识",
        Text::ObjectName => "对象名称",
        Text::Description => "描述",
        Text::PresentValue => "当前值",
        Text::EventState => "事件状态",
        Text::StatusFlags => "状态标志",
        Text::OutOfService => "停用",
        Text::FilterByName => "按名称筛选",
        Text::Loading => "加载中…",
        Text::NoData => "暂无数据",
        Text::NotFoundTitle => "页面不存在",
        Text::BackToDashboard => "返回仪表盘",
        Text::AnalogInputs => "模拟输入",
        Text::AnalogOutputs => "模拟输出",
        Text::AnalogValues => "模拟值",
        Text::BinaryInputs => "二进制输入",
        Text::BinaryOutputs => "二进制输出",
        Text::BinaryValues => "二进制值",
        Text::MultiStateInputs => "多状态输入",
        Text::MultiStateOutputs => "多状态输出",
        Text::MultiStateValues => "多状态值",
    };
    Some(message)
}

fn zh_tw(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "登入",
        Text::SignOut => "登出",
        Text::Username => "使用者名稱",
        Text::Password => "密碼",
        Text::Dashboard => "儀表板",
        Text::Users => "使用者管理",
        Text::Language => "語言",
        Text::Refresh => "重新整理",
        Text::Delete => "刪除",
        Text::Edit => "編輯",
        Text::Save => "儲存",
        Text::Cancel => "取消",
        Text::Loading => "載入中…",
        Text::NoData => "無資料",
        _ => return None,
    };
    Some(message)
}

fn de(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Anmelden",
        Text::SignOut => "Abmelden",
        Text::Username => "Benutzername",
        Text::Password => "Passwort",
        Text::Dashboard => "Übersicht",
        Text::Users => "Benutzer",
        Text::Language => "Sprache",
        Text::Refresh => "Aktualisieren",
        Text::Delete => "Löschen",
        Text::Edit => "Bearbeiten",
        Text::Save => "Speichern",
        Text::Cancel => "Abbrechen",
        Text::Loading => "Wird geladen…",
        Text::NoData => "Keine Daten",
        _ => return None,
    };
    Some(message)
}

fn fr(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Se connecter",
        Text::SignOut => "Se déconnecter",
        Text::Username => "Nom d'utilisateur",
        Text::Password => "Mot de passe",
        Text::Dashboard => "Tableau de bord",
        Text::Users => "Utilisateurs",
        Text::Language => "Langue",
        Text::Refresh => "Actualiser",
        Text::Delete => "Supprimer",
        Text::Edit => "Modifier",
        Text::Save => "Enregistrer",
        Text::Cancel => "Annuler",
        Text::Loading => "Chargement…",
        Text::NoData => "Aucune donnée",
        _ => return None,
    };
    Some(message)
}

fn es(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Iniciar sesión",
        Text::SignOut => "Cerrar sesión",
        Text::Username => "Nombre de usuario",
        Text::Password => "Contraseña",
        Text::Dashboard => "Panel de control",
        Text::Users => "Usuarios",
        Text::Language => "Idioma",
        Text::Refresh => "Actualizar",
        Text::Delete => "Eliminar",
        Text::Edit => "Editar",
        Text::Save => "Guardar",
        Text::Cancel => "Cancelar",
        Text::Loading => "Cargando…",
        Text::NoData => "Sin datos",
        _ => return None,
    };
    Some(message)
}

fn pt(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Iniciar sessão",
        Text::SignOut => "Terminar sessão",
        Text::Username => "Nome de utilizador",
        Text::Password => "Palavra-passe",
        Text::Dashboard => "Painel",
        Text::Users => "Utilizadores",
        Text::Language => "Idioma",
        Text::Refresh => "Atualizar",
        Text::Delete => "Eliminar",
        Text::Edit => "Editar",
        Text::Save => "Guardar",
        Text::Cancel => "Cancelar",
        Text::Loading => "A carregar…",
        Text::NoData => "Sem dados",
        _ => return None,
    };
    Some(message)
}

fn ru(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Войти",
        Text::SignOut => "Выйти",
        Text::Username => "Имя пользователя",
        Text::Password => "Пароль",
        Text::Dashboard => "Панель управления",
        Text::Users => "Пользователи",
        Text::Language => "Язык",
        Text::Refresh => "Обновить",
        Text::Delete => "Удалить",
        Text::Edit => "Изменить",
        Text::Save => "Сохранить",
        Text::Cancel => "Отмена",
        Text::Loading => "Загрузка…",
        Text::NoData => "Нет данных",
        _ => return None,
    };
    Some(message)
}

fn tr(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Giriş yap",
        Text::SignOut => "Çıkış yap",
        Text::Username => "Kullanıcı adı",
        Text::Password => "Parola",
        Text::Dashboard => "Gösterge paneli",
        Text::Users => "Kullanıcılar",
        Text::Language => "Dil",
        Text::Refresh => "Yenile",
        Text::Delete => "Sil",
        Text::Edit => "Düzenle",
        Text::Save => "Kaydet",
        Text::Cancel => "İptal",
        Text::Loading => "Yükleniyor…",
        Text::NoData => "Veri yok",
        _ => return None,
    };
    Some(message)
}

fn th(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "เข้าสู่ระบบ",
        Text::SignOut => "ออกจากระบบ",
        Text::Username => "ชื่อผู้ใช้",
        Text::Password => "รหัสผ่าน",
        Text::Dashboard => "แดชบอร์ด",
        Text::Users => "ผู้ใช้",
        Text::Language => "ภาษา",
        Text::Refresh => "รีเฟรช",
        Text::Delete => "ลบ",
        Text::Edit => "แก้ไข",
        Text::Save => "บันทึก",
        Text::Cancel => "ยกเลิก",
        Text::Loading => "กำลังโหลด…",
        Text::NoData => "ไม่มีข้อมูล",
        _ => return None,
    };
    Some(message)
}

fn id(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Masuk",
        Text::SignOut => "Keluar",
        Text::Username => "Nama pengguna",
        Text::Password => "Kata sandi",
        Text::Dashboard => "Dasbor",
        Text::Users => "Pengguna",
        Text::Language => "Bahasa",
        Text::Refresh => "Muat ulang",
        Text::Delete => "Hapus",
        Text::Edit => "Ubah",
        Text::Save => "Simpan",
        Text::Cancel => "Batal",
        Text::Loading => "Memuat…",
        Text::NoData => "Tidak ada data",
        _ => return None,
    };
    Some(message)
}

fn hi(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "साइन इन करें",
        Text::SignOut => "साइन आउट करें",
        Text::Username => "उपयोगकर्ता नाम",
        Text::Password => "पासवर्ड",
        Text::Dashboard => "डैशबोर्ड",
        Text::Users => "उपयोगकर्ता",
        Text::Language => "भाषा",
        Text::Refresh => "रीफ़्रेश",
        Text::Delete => "हटाएं",
        Text::Edit => "संपादित करें",
        Text::Save => "सहेजें",
        Text::Cancel => "रद्द करें",
        Text::Loading => "लोड हो रहा है…",
        Text::NoData => "कोई डेटा नहीं",
        _ => return None,
    };
    Some(message)
}

fn ar(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "تسجيل الدخول",
        Text::SignOut => "تسجيل الخروج",
        Text::Username => "اسم المستخدم",
        Text::Password => "كلمة المرور",
        Text::Dashboard => "لوحة التحكم",
        Text::Users => "المستخدمون",
        Text::Language => "اللغة",
        Text::Refresh => "تحديث",
        Text::Delete => "حذف",
        Text::Edit => "تعديل",
        Text::Save => "حفظ",
        Text::Cancel => "إلغاء",
        Text::Loading => "جارٍ التحميل…",
        Text::NoData => "لا توجد بيانات",
        _ => return None,
    };
    Some(message)
}

fn ms(text: Text) -> Option<&'static str> {
    let message = match text {
        Text::SignIn => "Log masuk",
        Text::SignOut => "Log keluar",
        Text::Username => "Nama pengguna",
        Text::Password => "Kata laluan",
        Text::Dashboard => "Papan pemuka",
        Text::Users => "Pengguna",
        Text::Language => "Bahasa",
        Text::Refresh => "Muat semula",
        Text::Delete => "Padam",
        Text::Edit => "Sunting",
        Text::Save => "Simpan",
        Text::Cancel => "Batal",
        Text::Loading => "Memuatkan…",
        Text::NoData => "Tiada data",
        _ => return None,
    };
    Some(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::mem::MemStore;
    use crate::storage::LANGUAGE_KEY;
    use strum::IntoEnumIterator;

    #[test]
    fn locale_codes_round_trip() {
        for locale in Locale::iter() {
            assert_eq!(locale.code().parse::<Locale>().ok(), Some(locale));
        }
    }

    #[test]
    fn every_locale_translates_the_sign_in_action() {
        for locale in Locale::iter() {
            assert!(!translate(locale, Text::SignIn).is_empty());
        }
        assert_eq!(translate(Locale::De, Text::SignIn), "Anmelden");
        assert_eq!(translate(Locale::ZhCn, Text::SignIn), "登录");
    }

    #[test]
    fn missing_keys_fall_back_to_english() {
        assert_eq!(
            translate(Locale::De, Text::ExportCsv),
            translate(Locale::En, Text::ExportCsv)
        );
        assert_eq!(translate(Locale::Th, Text::ObjectId), "Object ID");
    }

    #[test]
    fn stored_locale_defaults_to_english() {
        let store = MemStore::default();
        assert_eq!(stored_locale(&store), Locale::En);
        store.write(LANGUAGE_KEY, "not-a-locale");
        assert_eq!(stored_locale(&store), Locale::En);
    }

    #[test]
    fn selected_locale_persists_under_language_key() {
        let store = MemStore::default();
        persist_locale(&store, Locale::ZhCn);
        assert_eq!(store.read(LANGUAGE_KEY).as_deref(), Some("zh-CN"));
        assert_eq!(stored_locale(&store), Locale::ZhCn);
    }

    #[test]
    fn object_type_labels_cover_all_nine_collections() {
        for object_type in ObjectType::iter() {
            let label = translate(Locale::En, Text::for_object_type(object_type));
            assert!(!label.is_empty());
        }
    }
}
