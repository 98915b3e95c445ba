//! Enumerations used by the page, section, search and tenant settings models

use crate::serialization::model_enum;

model_enum! {
    /// Layout of a SharePoint page
    pub enum PageLayoutType {
        MicrosoftReserved => "microsoftReserved",
        Article => "article",
        Home => "home",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    /// How a page is promoted on its site
    pub enum PagePromotionType {
        MicrosoftReserved => "microsoftReserved",
        Page => "page",
        NewsPost => "newsPost",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum TitleAreaLayoutType {
        ImageAndTitle => "imageAndTitle",
        Plain => "plain",
        ColorBlock => "colorBlock",
        Overlap => "overlap",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum TitleAreaTextAlignmentType {
        Left => "left",
        Center => "center",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    /// Column arrangement of a horizontal canvas section
    pub enum HorizontalSectionLayoutType {
        None => "none",
        OneColumn => "oneColumn",
        TwoColumns => "twoColumns",
        ThreeColumns => "threeColumns",
        OneThirdLeftColumn => "oneThirdLeftColumn",
        OneThirdRightColumn => "oneThirdRightColumn",
        FullWidth => "fullWidth",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    /// Background emphasis of a canvas section
    pub enum SectionEmphasisType {
        None => "none",
        Neutral => "neutral",
        Soft => "soft",
        Strong => "strong",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    /// Device platforms a search answer can target
    pub enum DevicePlatformType {
        Unknown => "unknown",
        Android => "android",
        AndroidForWork => "androidForWork",
        IOs => "iOS",
        MacOs => "macOS",
        WindowsPhone81 => "windowsPhone81",
        WindowsPhone81AndLater => "windowsPhone81AndLater",
        Windows10AndLater => "windows10AndLater",
        AndroidWorkProfile => "androidWorkProfile",
        Windows => "windows",
        AndroidAsop => "androidASOP",
        AndroidMobileApplicationManagement => "androidMobileApplicationManagement",
        IOsMobileApplicationManagement => "iOSMobileApplicationManagement",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    /// Publication state of a search answer
    pub enum AnswerState {
        Published => "published",
        Draft => "draft",
        Excluded => "excluded",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    /// Automatic image tagging level for a tenant
    pub enum ImageTaggingChoice {
        Disabled => "disabled",
        Basic => "basic",
        Enhanced => "enhanced",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    /// How far content can be shared outside the organization
    pub enum SharingCapabilities {
        Disabled => "disabled",
        ExternalUserSharingOnly => "externalUserSharingOnly",
        ExternalUserAndGuestSharing => "externalUserAndGuestSharing",
        ExistingExternalUserSharingOnly => "existingExternalUserSharingOnly",
        UnknownFutureValue => "unknownFutureValue",
    }
}

model_enum! {
    pub enum SharingDomainRestrictionMode {
        None => "none",
        AllowList => "allowList",
        BlockList => "blockList",
        UnknownFutureValue => "unknownFutureValue",
    }
}
