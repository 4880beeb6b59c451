//! User-facing copy per locale.

use client_core::Locale;
use shared::domain::{LESSONS_HEADING, SOURCES_HEADING};

pub struct Strings {
    pub brand_prefix: &'static str,
    pub brand_highlight: &'static str,
    pub tagline: &'static str,
    pub nav_home: &'static str,
    pub nav_channels: &'static str,
    pub nav_terms: &'static str,
    pub category_prompt: &'static str,
    pub category_caption: &'static str,
    pub entries_suffix: &'static str,
    pub view_cta: &'static str,
    pub loading_title: &'static str,
    pub loading_note: &'static str,
    pub error_title: &'static str,
    pub error_message: &'static str,
    pub return_to_base: &'static str,
    pub back: &'static str,
    pub insufficient_title: &'static str,
    pub insufficient_body: &'static str,
    pub return_to_directory: &'static str,
    pub lessons_heading: &'static str,
    pub sources_heading: &'static str,
    pub disclaimer_heading: &'static str,
    pub disclaimer_body: &'static str,
    pub rights: &'static str,
}

pub const CHANNELS_URL: &str = "https://www.ceochannels.com/home-page-ceo-channels/";
pub const TERMS_URL: &str = "https://www.ceochannels.com/tos/";

static THAI: Strings = Strings {
    brand_prefix: "CEO",
    brand_highlight: "EXECUTIVE SUMMARY",
    tagline: "ถอดรหัสความคิดผู้นำ สรุปบทเรียนธุรกิจด้วย AI",
    nav_home: "EXECUTIVE SUMMARY",
    nav_channels: "CEO CHANNELS",
    nav_terms: "TERM OF SERVICE",
    category_prompt: "คลิกที่หมวดหมู่เพื่อค้นคว้าข้อมูล",
    category_caption: "CATEGORY",
    entries_suffix: "รายการ",
    view_cta: "ดูข้อมูล",
    loading_title: "AI กำลังเข้าถึงฐานข้อมูลเชิงลึก และสังเคราะห์โปรไฟล์...",
    loading_note: "หมายเหตุ: ข้อมูลสังเคราะห์ด้วย AI โปรดตรวจสอบความถูกต้องก่อนนำไปใช้อ้างอิง",
    error_title: "Connection Terminated",
    error_message: "ไม่สามารถวิเคราะห์ข้อมูลได้ในขณะนี้ กรุณาลองใหม่",
    return_to_base: "Return to Base",
    back: "BACK",
    insufficient_title: "Data Unavailable",
    insufficient_body: "Insufficient verifiable public data to generate a safe, accurate biography for this profile. We strictly adhere to factual integrity.",
    return_to_directory: "Return to Directory",
    lessons_heading: LESSONS_HEADING,
    sources_heading: SOURCES_HEADING,
    disclaimer_heading: "Disclaimer",
    disclaimer_body: "เนื้อหาทั้งหมดบนแพลตฟอร์ม CEO EXECUTIVE SUMMARY ถูกรวบรวม สังเคราะห์ และเรียบเรียงโดยระบบปัญญาประดิษฐ์ (AI) เพื่อวัตถุประสงค์ในการให้ข้อมูลและการศึกษาเชิงธุรกิจเท่านั้น ไม่ถือเป็นคำแนะนำด้านการลงทุน การเงิน หรือกฎหมาย",
    rights: "CEO EXECUTIVE SUMMARY. All Rights Reserved.",
};

static ENGLISH: Strings = Strings {
    brand_prefix: "CEO",
    brand_highlight: "EXECUTIVE SUMMARY",
    tagline: "Decoding how leaders think. Business lessons summarized by AI.",
    nav_home: "EXECUTIVE SUMMARY",
    nav_channels: "CEO CHANNELS",
    nav_terms: "TERM OF SERVICE",
    category_prompt: "Pick a category to start researching",
    category_caption: "CATEGORY",
    entries_suffix: "entries",
    view_cta: "View",
    loading_title: "AI is reaching into its sources and synthesizing the profile...",
    loading_note: "Note: AI-synthesized content. Verify before citing.",
    error_title: "Connection Terminated",
    error_message: "Unable to analyse this profile right now. Please try again.",
    return_to_base: "Return to Base",
    back: "BACK",
    insufficient_title: "Data Unavailable",
    insufficient_body: "Insufficient verifiable public data to generate a safe, accurate biography for this profile. We strictly adhere to factual integrity.",
    return_to_directory: "Return to Directory",
    lessons_heading: LESSONS_HEADING,
    sources_heading: SOURCES_HEADING,
    disclaimer_heading: "Disclaimer",
    disclaimer_body: "All content on CEO EXECUTIVE SUMMARY is compiled, synthesized, and written by an AI system for business information and education only. It is not investment, financial, or legal advice.",
    rights: "CEO EXECUTIVE SUMMARY. All Rights Reserved.",
};

pub fn strings_for(locale: Locale) -> &'static Strings {
    match locale {
        Locale::Th => &THAI,
        Locale::En => &ENGLISH,
    }
}
