#![allow(dead_code)]

/// 以 `\n` 撰寫的片段轉成 CRLF
pub fn crlf(text: &str) -> String {
    text.replace('\n', "\r\n")
}

pub const KO_FOOTER_BEFORE: &str = "  ko: {
    // Footer Legal Links
    footer: {
      seoTitle: '킬러 스도쿠 소개',
      seoDescription: '무료 온라인 킬러 스도쿠 퍼즐',
      seoLinks: {
        home: '홈',
      },
    },
  },
";

pub const KO_FOOTER_AFTER: &str = "  ko: {
    // Footer Legal Links
    footer: {
      about: '소개',
      howToPlay: '게임 방법',
      strategy: '전략',
      terms: '서비스 이용약관',
      privacy: '개인정보처리방침',
      cookies: '쿠키',
      contact: '문의하기',
    },

    // Content Pages
    about: {
      seoTitle: '킬러 스도쿠 소개',
      seoDescription: '무료 온라인 킬러 스도쿠 퍼즐',
      seoLinks: {
        home: '홈',
      },
    },
  },
";

pub const EN_TERMS_BEFORE: &str = "      termsOfService: {
        serviceAvailability: 'Service Availability',
        serviceAvailabilityContent: 'We strive to maintain the service but cannot promise uninterrupted access.',
        liability: 'Limitation of Liability',
        liabilityContent: 'To the maximum extent permitted by law, we are not liable for losses.',
        termination: 'Termination',
        terminationContent: 'We may suspend access at any time.',
      },
";

pub const EN_TERMS_AFTER: &str = "      termsOfService: {
        serviceAvailability: 'Service Availability',
        serviceAvailabilityContent: 'We strive to maintain the service but cannot promise uninterrupted access.',
        disclaimer: 'Disclaimer',
        disclaimerContent: 'The service is provided \\\"as is\\\" without warranties of any kind. We do not guarantee accuracy, reliability, or availability of the service.',
        limitationOfLiability: 'Limitation of Liability',
        limitationOfLiabilityContent: 'To the maximum extent permitted by law, we shall not be liable for any indirect, incidental, special, consequential, or punitive damages arising from your use of the service.',
        termination: 'Termination',
        terminationContent: 'We may suspend access at any time.',
      },
";

pub const ZH_TERMS_BEFORE: &str = "      termsOfService: {
        serviceAvailability: '服務可用性',
        serviceAvailabilityContent: '我們努力維持服務的穩定運作.',
        liability: '責任限制',
        liabilityContent: '在法律允許的最大範圍內我們不承擔責任.',
        termination: '終止',
      },
";

pub const ZH_TERMS_AFTER: &str = "      termsOfService: {
        serviceAvailability: '服務可用性',
        serviceAvailabilityContent: '我們努力維持服務的穩定運作.',
        disclaimer: '免責聲明',
        disclaimerContent: '服務按「現狀」提供，不提供任何形式的保證。我們不保證服務的準確性、可靠性或可用性。',
        limitationOfLiability: '責任限制',
        limitationOfLiabilityContent: '在法律允許的最大範圍內，我們不對因使用服務而產生的任何間接、附帶、特殊、後果性或懲罰性損害負責。',
        termination: '終止',
      },
";

pub const KO_TERMS_BEFORE: &str = "      termsOfService: {
        serviceAvailability: '서비스 가용성',
        serviceAvailabilityContent: '저희는 서비스 가용성을 유지하기 위해 노력합니다.',
        liability: '책임 제한',
        liabilityContent: '법률이 허용하는 최대 범위 내에서 책임을 지지 않습니다.',
        termination: '계약 해지',
      },
";

pub const KO_TERMS_AFTER: &str = "      termsOfService: {
        serviceAvailability: '서비스 가용성',
        serviceAvailabilityContent: '저희는 서비스 가용성을 유지하기 위해 노력합니다.',
        disclaimer: '면책 조항',
        disclaimerContent: '서비스는 어떠한 종류의 보증 없이 \\\"있는 그대로\\\" 제공됩니다. 저희는 서비스의 정확성, 신뢰성 또는 가용성을 보장하지 않습니다.',
        limitationOfLiability: '책임 제한',
        limitationOfLiabilityContent: '법률이 허용하는 최대 범위 내에서 저희는 서비스 사용으로 인해 발생하는 간접적, 부수적, 특별, 결과적 또는 징벌적 손해에 대해 책임지지 않습니다.',
        termination: '계약 해지',
      },
";

pub const JA_TERMS_BEFORE: &str = "      termsOfService: {
        serviceAvailability: 'サービスの可用性',
        serviceAvailabilityContent: '当社はサービスの可用性を維持するよう努めます.',
        liability: '責任の制限',
        liabilityContent: '法律で許可される最大限の範囲で責任を負いません.',
        termination: '契約終了',
      },
";

pub const JA_TERMS_AFTER: &str = "      termsOfService: {
        serviceAvailability: 'サービスの可用性',
        serviceAvailabilityContent: '当社はサービスの可用性を維持するよう努めます.',
        disclaimer: '免責事項',
        disclaimerContent: 'サービスはいかなる種類の保証もなく「現状のまま」提供されます。当社はサービスの正確性、信頼性、または可用性を保証しません。',
        limitationOfLiability: '責任の制限',
        limitationOfLiabilityContent: '法律で許可される最大限の範囲で、当社はサービスの使用から生じる間接的、付随的、特別、結果的、または懲罰的損害について責任を負いません。',
        termination: '契約終了',
      },
";

/// (規則名稱, 修改前, 修改後)，依內建規則順序
pub fn rule_fixtures() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("ko-footer-links", KO_FOOTER_BEFORE, KO_FOOTER_AFTER),
        ("en-terms-disclaimer", EN_TERMS_BEFORE, EN_TERMS_AFTER),
        ("zh-terms-disclaimer", ZH_TERMS_BEFORE, ZH_TERMS_AFTER),
        ("ko-terms-disclaimer", KO_TERMS_BEFORE, KO_TERMS_AFTER),
        ("ja-terms-disclaimer", JA_TERMS_BEFORE, JA_TERMS_AFTER),
    ]
}

pub const HEADER: &str = "import { useState, useEffect } from 'react';

// 語言翻譯對象
const translations = {
";

pub const FOOTER: &str = "};

export default translations;
";

/// 含五個語言區塊的完整檔案 (LF)
pub fn full_document(after: bool) -> String {
    let mut doc = String::from(HEADER);
    for (_, before_text, after_text) in rule_fixtures() {
        doc.push_str(if after { after_text } else { before_text });
    }
    doc.push_str(FOOTER);
    doc
}
